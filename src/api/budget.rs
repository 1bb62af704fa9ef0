use reqwest::Method;

use super::client::ApiClient;
use super::error::ClientError;
use super::models::{Budget, NewBudget};

const BUDGETS_PATH: &str = "/budget/budget/";

impl ApiClient {
    /// `GET /budget/budget/`
    pub async fn list_budgets(&self) -> Result<Vec<Budget>, ClientError> {
        self.fetch::<_, ()>(Method::GET, BUDGETS_PATH, None).await
    }

    /// `POST /budget/budget/`
    ///
    /// The created record is not returned: callers re-fetch the list to see
    /// server-computed totals.
    pub async fn create_budget(&self, budget: &NewBudget) -> Result<(), ClientError> {
        budget.validate()?;
        self.send(Method::POST, BUDGETS_PATH, Some(budget)).await
    }
}
