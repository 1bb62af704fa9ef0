//! Bearer token persistence.
//!
//! The API client holds a `SessionStore` and re-reads it on every request,
//! so a login, logout or password change is visible to the next call
//! without any cache invalidation.

mod file;
mod memory;
mod secure;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use secure::SecureString;

/// Errors raised while reading or writing the persisted token.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read token file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write token file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock token file '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Storage for the single session token.
///
/// Implementations must be cheap to call repeatedly: the client calls
/// `get` once per request.
pub trait SessionStore: Send + Sync {
    /// Read the stored token. `Ok(None)` means unauthenticated.
    fn get(&self) -> Result<Option<SecureString>, StorageError>;

    /// Replace the stored token.
    fn set(&self, token: &SecureString) -> Result<(), StorageError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}
