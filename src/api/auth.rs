use reqwest::Method;

use super::client::ApiClient;
use super::error::ClientError;
use super::models::{Credentials, Registration, TokenResponse};
use super::validation::require;
use crate::session::SecureString;

impl ApiClient {
    /// `POST /auth/login`. Stores the returned access token on success.
    pub async fn login(&self, account: &str, password: &str) -> Result<(), ClientError> {
        require("account", account)?;
        require("password", password)?;

        let credentials = Credentials {
            account: account.to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse = self
            .fetch(Method::POST, "/auth/login", Some(&credentials))
            .await?;

        self.session()
            .set(&SecureString::new(response.access_token))?;
        tracing::info!(account, "Logged in");
        Ok(())
    }

    /// `POST /auth/register`. Does not log in.
    pub async fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        require("username", &registration.username)?;
        require("account", &registration.account)?;
        require("email", &registration.email)?;
        require("password", &registration.password)?;

        self.send(Method::POST, "/auth/register", Some(registration))
            .await?;
        tracing::info!(account = %registration.account, "Registered account");
        Ok(())
    }

    /// Forget the stored token. Purely local; the API has no logout call.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.session().clear()?;
        tracing::info!("Logged out");
        Ok(())
    }
}
