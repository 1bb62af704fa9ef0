use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{SecureString, SessionStore, StorageError};

/// Token store backed by a single file.
///
/// The file holds the raw token and nothing else. Writes hold an
/// exclusive lock for the duration of the truncate + write.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default token location.
    ///
    /// Uses `<data_dir>/budget-client/token`, falling back to the current
    /// directory if the platform has no data dir.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("budget-client").join("token")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<SecureString>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let token = content.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(SecureString::new(token)))
    }

    fn set(&self, token: &SecureString) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(false);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(|e| self.write_error(e))?;
        file.lock_exclusive().map_err(|e| StorageError::Lock {
            path: self.path.clone(),
            source: e,
        })?;

        let result = file
            .set_len(0)
            .and_then(|_| file.write_all(token.expose().as_bytes()))
            .and_then(|_| file.flush());
        let _ = FileExt::unlock(&file);

        result.map_err(|e| self.write_error(e))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_error(e)),
        }
    }
}
