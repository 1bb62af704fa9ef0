//! Client for the remote budget API (`/api/v1`).
//!
//! `ApiClient::request` is the single HTTP entry point; the resource
//! operations in `auth`, `budget`, `expense` and `user` each map one
//! domain action onto exactly one request.

mod auth;
mod budget;
mod client;
mod error;
mod expense;
pub mod models;
mod user;
pub mod validation;

pub use client::ApiClient;
pub use error::ClientError;
pub use models::{
    Budget, BudgetId, BudgetPeriod, BudgetStatus, Expense, ExpenseId, ExpenseUpdate, NewBudget,
    NewExpense, Registration, User,
};
