use reqwest::Method;

use super::client::ApiClient;
use super::error::ClientError;
use super::models::{Expense, ExpenseId, ExpenseUpdate, NewExpense};

const EXPENSES_PATH: &str = "/expense/expenses/";

fn expense_path(id: ExpenseId) -> String {
    format!("{}{}", EXPENSES_PATH, id)
}

impl ApiClient {
    /// `GET /expense/expenses/`
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ClientError> {
        self.fetch::<_, ()>(Method::GET, EXPENSES_PATH, None).await
    }

    /// `POST /expense/expenses/`
    pub async fn create_expense(&self, expense: &NewExpense) -> Result<(), ClientError> {
        expense.validate()?;
        self.send(Method::POST, EXPENSES_PATH, Some(expense)).await
    }

    /// `PATCH /expense/expenses/{id}`. Only description and amount change.
    pub async fn update_expense(
        &self,
        id: ExpenseId,
        update: &ExpenseUpdate,
    ) -> Result<(), ClientError> {
        update.validate()?;
        self.send(Method::PATCH, &expense_path(id), Some(update))
            .await
    }

    /// `DELETE /expense/expenses/{id}`. The owning budget is untouched.
    pub async fn delete_expense(&self, id: ExpenseId) -> Result<(), ClientError> {
        self.send::<()>(Method::DELETE, &expense_path(id), None).await
    }
}
