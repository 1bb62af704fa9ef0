use parking_lot::Mutex;

use super::{SecureString, SessionStore, StorageError};

/// Process-local token store. Nothing survives a restart.
#[derive(Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<SecureString>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(SecureString::new(token))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<SecureString>, StorageError> {
        Ok(self.token.lock().clone())
    }

    fn set(&self, token: &SecureString) -> Result<(), StorageError> {
        *self.token.lock() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.token.lock().take();
        Ok(())
    }
}
