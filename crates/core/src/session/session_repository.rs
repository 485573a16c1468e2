//! Role token stores.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::errors::{Error, Result};

use super::session_traits::SessionRepositoryTrait;

/// Keeps the token in memory only.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionRepositoryTrait for InMemoryTokenStore {
    fn get_token(&self) -> Result<Option<String>> {
        self.token
            .read()
            .map(|t| t.clone())
            .map_err(|e| Error::Repository(e.to_string()))
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| Error::Repository(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| Error::Repository(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Persists the token as the whole contents of a single file.
///
/// Writes are synchronous, so the file reflects the last login/logout even if
/// the process exits right after.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionRepositoryTrait for FileTokenStore {
    fn get_token(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trip() {
        let tmp = tempdir().unwrap();
        let store = FileTokenStore::new(tmp.path().join("nested").join("jwt"));

        assert_eq!(store.get_token().unwrap(), None);
        store.set_token("lp").unwrap();
        assert_eq!(store.get_token().unwrap().as_deref(), Some("lp"));

        store.clear_token().unwrap();
        assert_eq!(store.get_token().unwrap(), None);
        // Clearing twice is fine.
        store.clear_token().unwrap();
    }

    #[test]
    fn memory_store_starts_with_given_token() {
        let store = InMemoryTokenStore::with_token("partner");
        assert_eq!(store.get_token().unwrap().as_deref(), Some("partner"));
        store.clear_token().unwrap();
        assert_eq!(store.get_token().unwrap(), None);
    }
}
