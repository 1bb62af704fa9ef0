//! Effect runner for the screen reducers.
//!
//! Reducers only record *which* request a screen is waiting on. The host
//! executes that request against the API, feeds the result back as an
//! intent, and repeats until the screen is idle (a reducer may queue a
//! follow-up, e.g. re-fetching the list after a create). It also applies
//! the navigation consequences of login, registration and sign-out.

use crate::api::ApiClient;
use crate::ui::account::{AccountIntent, AccountReducer, AccountRequest, AccountState};
use crate::ui::add_expense::{AddExpenseIntent, AddExpenseReducer, AddExpenseRequest, AddExpenseState};
use crate::ui::budget::{BudgetIntent, BudgetReducer, BudgetRequest, BudgetState};
use crate::ui::history::{HistoryIntent, HistoryReducer, HistoryRequest, HistoryState};
use crate::ui::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::dispatch;
use crate::ui::nav::{NavIntent, NavReducer, Route, Tab};
use crate::ui::notice::Notice;
use crate::ui::register::{RegisterIntent, RegisterReducer, RegisterState};

pub struct ScreenHost {
    client: ApiClient,
    route: Route,
    login: LoginState,
    register: RegisterState,
    budget: BudgetState,
    add_expense: AddExpenseState,
    history: HistoryState,
    account: AccountState,
}

impl ScreenHost {
    /// Build the host, choosing the start route from the stored session.
    ///
    /// A session that cannot be read counts as signed out.
    pub fn new(client: ApiClient) -> Self {
        let has_session = match client.session().get() {
            Ok(token) => token.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored session");
                false
            }
        };

        Self {
            client,
            route: Route::initial(has_session),
            login: LoginState::default(),
            register: RegisterState::default(),
            budget: BudgetState::default(),
            add_expense: AddExpenseState::default(),
            history: HistoryState::default(),
            account: AccountState::default(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn register(&self) -> &RegisterState {
        &self.register
    }

    pub fn budget(&self) -> &BudgetState {
        &self.budget
    }

    pub fn add_expense(&self) -> &AddExpenseState {
        &self.add_expense
    }

    pub fn history(&self) -> &HistoryState {
        &self.history
    }

    pub fn account(&self) -> &AccountState {
        &self.account
    }

    /// The notice shown on the current route, if any.
    pub fn current_notice(&self) -> Option<&Notice> {
        match self.route {
            Route::Login => self.login.notice.as_ref(),
            Route::Register => self.register.notice.as_ref(),
            Route::Home(Tab::AddExpense) => self.add_expense.notice.as_ref(),
            Route::Home(Tab::History) => self.history.notice.as_ref(),
            Route::Home(Tab::Budget) => self.budget.notice.as_ref(),
            Route::Home(Tab::Account) => self.account.notice.as_ref(),
        }
    }

    /// Enter the start route (loads its data when it is a home tab).
    pub async fn start(&mut self) {
        self.enter(self.route).await;
    }

    pub async fn navigate(&mut self, intent: NavIntent) {
        let previous = self.route;
        dispatch::<NavReducer>(&mut self.route, intent);
        if previous != self.route {
            tracing::debug!(from = ?previous, to = ?self.route, "Navigate");
            self.leave(previous);
            self.enter(self.route).await;
        }
    }

    /// Show `tab`, refreshing it even if it is already current.
    pub async fn open_tab(&mut self, tab: Tab) {
        if self.route == Route::Home(tab) {
            self.enter(self.route).await;
        } else {
            self.navigate(NavIntent::SelectTab(tab)).await;
        }
    }

    fn leave(&mut self, route: Route) {
        match route {
            Route::Login => dispatch::<LoginReducer>(&mut self.login, LoginIntent::Leave),
            Route::Register => {
                dispatch::<RegisterReducer>(&mut self.register, RegisterIntent::Leave)
            }
            Route::Home(Tab::AddExpense) => {
                dispatch::<AddExpenseReducer>(&mut self.add_expense, AddExpenseIntent::Leave)
            }
            Route::Home(Tab::History) => {
                dispatch::<HistoryReducer>(&mut self.history, HistoryIntent::Leave)
            }
            Route::Home(Tab::Budget) => {
                dispatch::<BudgetReducer>(&mut self.budget, BudgetIntent::Leave)
            }
            Route::Home(Tab::Account) => {
                dispatch::<AccountReducer>(&mut self.account, AccountIntent::Leave)
            }
        }
    }

    /// Focus handling: every home tab reloads its data on entry.
    async fn enter(&mut self, route: Route) {
        match route {
            Route::Login | Route::Register => {}
            Route::Home(Tab::AddExpense) => {
                dispatch::<AddExpenseReducer>(&mut self.add_expense, AddExpenseIntent::Refresh);
                self.drive_add_expense().await;
            }
            Route::Home(Tab::History) => {
                dispatch::<HistoryReducer>(&mut self.history, HistoryIntent::Refresh);
                self.drive_history().await;
            }
            Route::Home(Tab::Budget) => {
                dispatch::<BudgetReducer>(&mut self.budget, BudgetIntent::Refresh);
                self.drive_budget().await;
            }
            Route::Home(Tab::Account) => {
                dispatch::<AccountReducer>(&mut self.account, AccountIntent::Refresh);
                self.drive_account().await;
            }
        }
    }

    pub async fn send_login(&mut self, intent: LoginIntent) {
        dispatch::<LoginReducer>(&mut self.login, intent);
        self.drive_login().await;
        if self.login.signed_in {
            self.navigate(NavIntent::SignedIn).await;
            // The login screen may not have been the route we left.
            dispatch::<LoginReducer>(&mut self.login, LoginIntent::Leave);
        }
    }

    pub async fn send_register(&mut self, intent: RegisterIntent) {
        dispatch::<RegisterReducer>(&mut self.register, intent);
        self.drive_register().await;
        if self.register.registered {
            self.navigate(NavIntent::Registered).await;
            dispatch::<RegisterReducer>(&mut self.register, RegisterIntent::Leave);
        }
    }

    pub async fn send_budget(&mut self, intent: BudgetIntent) {
        dispatch::<BudgetReducer>(&mut self.budget, intent);
        self.drive_budget().await;
    }

    pub async fn send_add_expense(&mut self, intent: AddExpenseIntent) {
        dispatch::<AddExpenseReducer>(&mut self.add_expense, intent);
        self.drive_add_expense().await;
    }

    pub async fn send_history(&mut self, intent: HistoryIntent) {
        dispatch::<HistoryReducer>(&mut self.history, intent);
        self.drive_history().await;
    }

    pub async fn send_account(&mut self, intent: AccountIntent) {
        dispatch::<AccountReducer>(&mut self.account, intent);
        self.drive_account().await;
        if self.account.signed_out {
            self.navigate(NavIntent::SignedOut).await;
            dispatch::<AccountReducer>(&mut self.account, AccountIntent::Leave);
        }
    }

    async fn drive_login(&mut self) {
        while let Some((ticket, credentials)) = self.login.request.pending().cloned() {
            let result = self
                .client
                .login(&credentials.account, &credentials.password)
                .await;
            dispatch::<LoginReducer>(&mut self.login, LoginIntent::Completed { ticket, result });
        }
    }

    async fn drive_register(&mut self) {
        while let Some((ticket, registration)) = self.register.request.pending().cloned() {
            let result = self.client.register(&registration).await;
            dispatch::<RegisterReducer>(
                &mut self.register,
                RegisterIntent::Completed { ticket, result },
            );
        }
    }

    async fn drive_budget(&mut self) {
        while let Some((ticket, request)) = self.budget.request.pending().cloned() {
            let intent = match request {
                BudgetRequest::Load => BudgetIntent::Loaded {
                    ticket,
                    result: self.client.list_budgets().await,
                },
                BudgetRequest::Create(budget) => BudgetIntent::Created {
                    ticket,
                    result: self.client.create_budget(&budget).await,
                },
            };
            dispatch::<BudgetReducer>(&mut self.budget, intent);
        }
    }

    async fn drive_add_expense(&mut self) {
        while let Some((ticket, request)) = self.add_expense.request.pending().cloned() {
            let intent = match request {
                AddExpenseRequest::LoadBudgets => AddExpenseIntent::BudgetsLoaded {
                    ticket,
                    result: self.client.list_budgets().await,
                },
                AddExpenseRequest::Create(expense) => AddExpenseIntent::Created {
                    ticket,
                    result: self.client.create_expense(&expense).await,
                },
            };
            dispatch::<AddExpenseReducer>(&mut self.add_expense, intent);
        }
    }

    async fn drive_history(&mut self) {
        while let Some((ticket, request)) = self.history.request.pending().cloned() {
            let intent = match request {
                HistoryRequest::Load => HistoryIntent::Loaded {
                    ticket,
                    result: self.client.list_expenses().await,
                },
                HistoryRequest::Delete(id) => HistoryIntent::Deleted {
                    ticket,
                    result: self.client.delete_expense(id).await,
                },
                HistoryRequest::Update(id, update) => HistoryIntent::Updated {
                    ticket,
                    result: self.client.update_expense(id, &update).await,
                },
            };
            dispatch::<HistoryReducer>(&mut self.history, intent);
        }
    }

    async fn drive_account(&mut self) {
        while let Some((ticket, request)) = self.account.request.pending().cloned() {
            let intent = match request {
                AccountRequest::LoadUser => AccountIntent::UserLoaded {
                    ticket,
                    result: self.client.current_user().await,
                },
                AccountRequest::ChangePassword(change) => AccountIntent::PasswordChanged {
                    ticket,
                    result: self
                        .client
                        .change_password(&change.old_password, &change.new_password)
                        .await,
                },
                AccountRequest::Logout => AccountIntent::LoggedOut {
                    ticket,
                    result: self.client.logout(),
                },
            };
            dispatch::<AccountReducer>(&mut self.account, intent);
        }
    }
}
