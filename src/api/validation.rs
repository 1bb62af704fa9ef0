//! Pre-submission input checks.
//!
//! These only guard against obviously malformed input; the server stays
//! the authority on business rules.

use super::error::ClientError;
use super::models::{BudgetId, ExpenseUpdate, NewBudget, NewExpense};

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Budget amounts are whole currency units.
pub fn parse_budget_amount(input: &str) -> Result<u64, ClientError> {
    match input.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ClientError::validation(
            "amount",
            "Please enter a valid number.",
        )),
    }
}

pub fn parse_expense_amount(input: &str) -> Result<f64, ClientError> {
    let value = input.trim().parse::<f64>().ok();
    match value {
        Some(v) => check_expense_amount(v).map(|_| v),
        None => Err(ClientError::validation(
            "amount",
            "Amount must be a positive number.",
        )),
    }
}

pub fn check_expense_amount(amount: f64) -> Result<(), ClientError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ClientError::validation(
            "amount",
            "Amount must be a positive number.",
        ))
    }
}

pub fn check_period(year: i32, month: u32) -> Result<(), ClientError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ClientError::validation(
            "year",
            format!("Year must be between {} and {}.", MIN_YEAR, MAX_YEAR),
        ));
    }
    if !(1..=12).contains(&month) {
        return Err(ClientError::validation(
            "month",
            "Month must be between 1 and 12.",
        ));
    }
    Ok(())
}

/// Rejects empty or whitespace-only input.
pub fn require(field: &'static str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        Err(ClientError::validation(field, format!("{} is required.", field)))
    } else {
        Ok(())
    }
}

impl NewBudget {
    /// Build a budget from raw form input.
    pub fn parse(amount: &str, year: i32, month: u32) -> Result<Self, ClientError> {
        let budget = NewBudget {
            amount: parse_budget_amount(amount)?,
            year,
            month,
        };
        budget.validate()?;
        Ok(budget)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.amount == 0 {
            return Err(ClientError::validation(
                "amount",
                "Please enter a valid number.",
            ));
        }
        check_period(self.year, self.month)
    }
}

impl NewExpense {
    /// Build an expense from raw form input. `budget_id` is `None` when the
    /// user has not picked a budget yet.
    pub fn parse(
        description: &str,
        amount: &str,
        budget_id: Option<BudgetId>,
    ) -> Result<Self, ClientError> {
        require("description", description)?;
        let amount = parse_expense_amount(amount)?;
        let budget_id = budget_id
            .ok_or_else(|| ClientError::validation("budget", "Please select a budget."))?;
        Ok(NewExpense {
            description: description.trim().to_string(),
            amount,
            budget_id,
        })
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        require("description", &self.description)?;
        check_expense_amount(self.amount)
    }
}

impl ExpenseUpdate {
    pub fn parse(description: &str, amount: &str) -> Result<Self, ClientError> {
        require("description", description)?;
        Ok(ExpenseUpdate {
            description: description.trim().to_string(),
            amount: parse_expense_amount(amount)?,
        })
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        require("description", &self.description)?;
        check_expense_amount(self.amount)
    }
}
