//! Command-line front end.
//!
//! Each subcommand drives one screen through the `ScreenHost` exactly as a
//! user would (fill fields, submit), then prints the resulting state and
//! notice.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::api::{ApiClient, BudgetId, ExpenseId};
use crate::config::Config;
use crate::session::FileSessionStore;
use crate::ui::account::AccountIntent;
use crate::ui::add_expense::AddExpenseIntent;
use crate::ui::budget::BudgetIntent;
use crate::ui::history::HistoryIntent;
use crate::ui::login::LoginIntent;
use crate::ui::register::RegisterIntent;
use crate::ui::{NavIntent, Notice, Route, ScreenHost, Tab};

pub use render::{budget_line, expense_line, notice_line};

#[derive(Debug, Parser)]
#[command(name = "budget", version, about = "Track budgets and expenses against a budget API")]
pub struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL (e.g. http://host:8000/api/v1)
    #[arg(long, env = "BUDGET_API_URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        account: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and store the session token
    Login {
        #[arg(long)]
        account: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Change the password (requires logging in again)
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
    },
    /// Monthly budgets
    #[command(subcommand)]
    Budgets(BudgetsCommand),
    /// Expenses
    #[command(subcommand)]
    Expenses(ExpensesCommand),
}

#[derive(Debug, Subcommand)]
pub enum BudgetsCommand {
    /// List budgets with spending totals
    List,
    /// Create a budget for a month
    Create {
        /// Whole amount, e.g. 500
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// Defaults to the current month
        #[arg(long)]
        month: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExpensesCommand {
    /// List expenses
    List,
    /// Record an expense
    Add {
        #[arg(long)]
        description: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Budget id (default: first budget)
        #[arg(long)]
        budget: Option<BudgetId>,
    },
    /// Change an expense's description and/or amount
    Edit {
        id: ExpenseId,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Delete an expense
    Delete { id: ExpenseId },
}

/// Build the host from config and flags.
pub fn build_host(cli: &Cli) -> anyhow::Result<ScreenHost> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(url) = &cli.base_url {
        config.api.base_url = url.clone();
        config.validate()?;
    }

    let store = FileSessionStore::new(config.token_path());
    tracing::debug!(base_url = %config.api.base_url, token_path = %store.path().display(), "Client configured");
    let client = ApiClient::new(config.api.base_url.clone(), Arc::new(store))
        .context("building HTTP client")?;
    Ok(ScreenHost::new(client))
}

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut host = build_host(&cli)?;
    let notice = execute(&mut host, cli.command).await;
    Ok(report(notice.as_ref()))
}

/// Run one command; returns the notice the user should see.
pub async fn execute(host: &mut ScreenHost, command: Command) -> Option<Notice> {
    match command {
        Command::Register {
            username,
            account,
            email,
            password,
        } => {
            host.navigate(NavIntent::ShowRegister).await;
            for intent in [
                RegisterIntent::SetUsername(username),
                RegisterIntent::SetAccount(account),
                RegisterIntent::SetEmail(email),
                RegisterIntent::SetPassword(password),
                RegisterIntent::Submit,
            ] {
                host.send_register(intent).await;
            }
            host.register().notice.clone()
        }
        Command::Login { account, password } => {
            host.navigate(NavIntent::ShowLogin).await;
            host.send_login(LoginIntent::SetAccount(account.clone())).await;
            host.send_login(LoginIntent::SetPassword(password)).await;
            host.send_login(LoginIntent::Submit).await;
            if matches!(host.route(), Route::Home(_)) {
                Some(Notice::success("Success", format!("Logged in as {}.", account)))
            } else {
                host.login().notice.clone()
            }
        }
        Command::Logout => {
            host.send_account(AccountIntent::Logout).await;
            host.account()
                .notice
                .clone()
                .or_else(|| Some(Notice::success("Success", "Logged out.")))
        }
        Command::Whoami => {
            host.open_tab(Tab::Account).await;
            if let Some(user) = &host.account().user {
                println!("Account: {}", user.account);
                println!("Name:    {}", user.username);
            }
            host.account().notice.clone()
        }
        Command::Password { old, new } => {
            for intent in [
                AccountIntent::ShowPasswordForm,
                AccountIntent::SetOldPassword(old),
                AccountIntent::SetNewPassword(new),
                AccountIntent::SubmitPassword,
            ] {
                host.send_account(intent).await;
            }
            host.account().notice.clone()
        }
        Command::Budgets(BudgetsCommand::List) => {
            host.open_tab(Tab::Budget).await;
            print_budgets(host);
            host.budget().notice.clone()
        }
        Command::Budgets(BudgetsCommand::Create {
            amount,
            year,
            month,
        }) => {
            host.open_tab(Tab::Budget).await;
            host.send_budget(BudgetIntent::SetAmount(amount)).await;
            if let Some(year) = year {
                host.send_budget(BudgetIntent::SetYear(year)).await;
            }
            if let Some(month) = month {
                host.send_budget(BudgetIntent::SetMonth(month)).await;
            }
            host.send_budget(BudgetIntent::Submit).await;
            print_budgets(host);
            host.budget().notice.clone()
        }
        Command::Expenses(ExpensesCommand::List) => {
            host.open_tab(Tab::History).await;
            print_expenses(host);
            host.history().notice.clone()
        }
        Command::Expenses(ExpensesCommand::Add {
            description,
            amount,
            budget,
        }) => {
            host.open_tab(Tab::AddExpense).await;
            if let Some(id) = budget {
                host.send_add_expense(AddExpenseIntent::SelectBudget(id)).await;
            }
            host.send_add_expense(AddExpenseIntent::SetDescription(description))
                .await;
            host.send_add_expense(AddExpenseIntent::SetAmount(amount)).await;
            host.send_add_expense(AddExpenseIntent::Submit).await;
            host.add_expense().notice.clone()
        }
        Command::Expenses(ExpensesCommand::Edit {
            id,
            description,
            amount,
        }) => {
            host.open_tab(Tab::History).await;
            host.send_history(HistoryIntent::BeginEdit(id)).await;
            if host.history().editing.is_some() {
                if let Some(description) = description {
                    host.send_history(HistoryIntent::SetDescription(description))
                        .await;
                }
                if let Some(amount) = amount {
                    host.send_history(HistoryIntent::SetAmount(amount)).await;
                }
                host.send_history(HistoryIntent::SaveEdit).await;
            }
            let notice = host.history().notice.clone();
            if notice.is_none() {
                print_expenses(host);
                return Some(Notice::success("Success", format!("Expense {} updated.", id)));
            }
            notice
        }
        Command::Expenses(ExpensesCommand::Delete { id }) => {
            host.open_tab(Tab::History).await;
            host.send_history(HistoryIntent::Delete(id)).await;
            host.history().notice.clone().or_else(|| {
                Some(Notice::success("Success", format!("Expense {} deleted.", id)))
            })
        }
    }
}

fn print_budgets(host: &ScreenHost) {
    for budget in &host.budget().budgets {
        println!("{}", budget_line(budget));
    }
}

fn print_expenses(host: &ScreenHost) {
    for expense in &host.history().expenses {
        println!("{}", expense_line(expense));
    }
}

/// Print the notice and map it to the process exit code.
fn report(notice: Option<&Notice>) -> ExitCode {
    match notice {
        Some(notice) if notice.is_error() => {
            eprintln!("{}", notice_line(notice));
            ExitCode::FAILURE
        }
        Some(notice) => {
            println!("{}", notice_line(notice));
            ExitCode::SUCCESS
        }
        None => ExitCode::SUCCESS,
    }
}
