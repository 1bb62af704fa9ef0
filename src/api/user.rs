use reqwest::Method;
use serde_json::Value;

use super::client::ApiClient;
use super::error::ClientError;
use super::models::{PasswordChange, User};
use super::validation::require;

const ME_PATH: &str = "/users/me";

impl ApiClient {
    /// `GET /users/me`
    ///
    /// Some server versions wrap the user in a one-element array; the first
    /// element is used in that case.
    pub async fn current_user(&self) -> Result<User, ClientError> {
        let value = self
            .fetch::<Value, ()>(Method::GET, ME_PATH, None)
            .await?;
        let value = match value {
            Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            other => other,
        };
        serde_json::from_value(value).map_err(|e| ClientError::Decode {
            path: ME_PATH.to_string(),
            source: e,
        })
    }

    /// `PUT /users/password`. Clears the stored token on success so the
    /// next authenticated call requires a fresh login. Succeeds even if the
    /// token cannot be cleared.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        require("old password", old_password)?;
        require("new password", new_password)?;

        let change = PasswordChange {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.send(Method::PUT, "/users/password", Some(&change))
            .await?;

        // The change is already applied server-side; a failed clear is
        // only logged.
        match self.session().clear() {
            Ok(()) => tracing::info!("Password changed, session cleared"),
            Err(e) => tracing::warn!(error = %e, "Password changed but session could not be cleared"),
        }
        Ok(())
    }
}
