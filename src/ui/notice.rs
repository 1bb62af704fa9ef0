//! Blocking user-facing messages (the alert of each screen).

use crate::api::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A message the user must acknowledge. Screens keep at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Notice for a failed operation.
    ///
    /// Validation failures show their own message; transport failures get
    /// the connectivity message; everything else gets `fallback`.
    pub fn from_error(err: &ClientError, fallback: &str) -> Self {
        match err {
            ClientError::Validation { message, .. } => Self::error("Invalid input", message.clone()),
            ClientError::Network(_) => Self::error("Error", "Unable to connect to server."),
            ClientError::Storage(_) => Self::error("Error", "Could not access the saved session."),
            ClientError::Api { .. } | ClientError::Encode { .. } | ClientError::Decode { .. } => {
                Self::error("Error", fallback)
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
