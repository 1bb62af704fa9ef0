//! Wire types for the budget API.

use serde::{Deserialize, Serialize};

pub type BudgetId = i64;
pub type ExpenseId = i64;

/// Monthly budget as returned by `GET /budget/budget/`.
///
/// `total_spent` and `remaining` are computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub year: i32,
    pub month: u32,
    pub amount: f64,
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub remaining: f64,
}

/// How a budget stands against its spending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    Remaining(f64),
    Over(f64),
}

impl Budget {
    pub fn period(&self) -> BudgetPeriod {
        BudgetPeriod {
            year: self.year,
            month: self.month,
        }
    }

    pub fn status(&self) -> BudgetStatus {
        if self.remaining >= 0.0 {
            BudgetStatus::Remaining(self.remaining)
        } else {
            BudgetStatus::Over(self.remaining.abs())
        }
    }
}

/// A (year, month) pair scoping a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    pub year: i32,
    pub month: u32,
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

/// Body of `POST /budget/budget/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBudget {
    pub amount: u64,
    pub year: i32,
    pub month: u32,
}

/// Expense as returned by `GET /expense/expenses/`.
///
/// List responses may embed the owning budget's period instead of (or
/// next to) the foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub budget_id: Option<BudgetId>,
    #[serde(default)]
    pub budget: Option<BudgetPeriod>,
}

/// Body of `POST /expense/expenses/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub budget_id: BudgetId,
}

/// Body of `PATCH /expense/expenses/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseUpdate {
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub account: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub account: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}
