use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ClientError;
use crate::session::SessionStore;

/// HTTP client for the budget API.
///
/// Holds no session state of its own: the token is read from the
/// injected `SessionStore` on every call. One attempt per call, no
/// timeout, no retry.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(Self::with_http(http, base_url, session))
    }

    pub fn with_http(
        http: Client,
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request and return the parsed JSON body.
    ///
    /// Returns `Ok(None)` for a success response with an empty body.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<Value>, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self.http.request(method.clone(), self.url(path));

        if let Some(token) = self.session.get()? {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.expose()));
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ClientError::Encode {
                path: path.to_string(),
                source: e,
            })?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = builder.send().await.map_err(|e| {
            let err = ClientError::Network(e);
            tracing::warn!(
                method = %method,
                path,
                error_type = err.error_type(),
                error = %err,
                "Request failed to complete"
            );
            err
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(method = %method, path, status = status.as_u16(), "API response");

        if !status.is_success() {
            let err = ClientError::Api {
                status: status.as_u16(),
                detail: error_detail(&bytes),
            };
            tracing::warn!(
                method = %method,
                path,
                status = status.as_u16(),
                error_type = err.error_type(),
                detail = err.detail().unwrap_or(""),
                "API rejected request"
            );
            return Err(err);
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            let err = ClientError::Decode {
                path: path.to_string(),
                source: e,
            };
            tracing::warn!(
                method = %method,
                path,
                error_type = err.error_type(),
                error = %err,
                "Unreadable response body"
            );
            err
        })
    }

    /// Request that must return a JSON body of type `T`.
    pub(crate) async fn fetch<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.request(method, path, body).await?.unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| ClientError::Decode {
            path: path.to_string(),
            source: e,
        })
    }

    /// Request whose response body, if any, is ignored.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.request(method, path, body).await.map(|_| ())
    }
}

/// Pull a human-readable message out of an error body.
///
/// Prefers a string `detail` field (the API's convention), falling back to
/// the raw text.
fn error_detail(bytes: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
        if let Some(detail) = value.get("detail").and_then(Value::as_str) {
            return Some(detail.to_string());
        }
    }

    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
