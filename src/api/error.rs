//! Error taxonomy for API operations.
//!
//! Every resource operation returns `Result<_, ClientError>`; the screen
//! layer turns errors into user notices.

use thiserror::Error;

use crate::session::StorageError;

/// Errors that can occur while talking to the budget API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected before any request was sent
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Server answered with a non-success status
    #[error("API error {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Api { status: u16, detail: Option<String> },

    /// Request could not complete (DNS, connect, reset, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Token could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// Request body could not be serialized; nothing was sent
    #[error("Failed to encode request body for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Success response did not have the expected shape
    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ClientError::Validation {
            field,
            message: message.into(),
        }
    }

    /// HTTP status for server-side rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided `detail` message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the server refused the credentials (401/403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Short machine-readable label, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Validation { .. } => "validation_error",
            ClientError::Api { .. } => "api_error",
            ClientError::Network(_) => "network_error",
            ClientError::Storage(_) => "storage_error",
            ClientError::Encode { .. } => "encode_error",
            ClientError::Decode { .. } => "decode_error",
        }
    }
}
