use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::base::TokenStore;
use crate::config::FileStoreConfig;
use crate::models::Token;

/// A token store backed by a single file on disk, so the session survives
/// process restarts. A missing file simply means "not logged in".
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(config: &FileStoreConfig) -> Self {
        Self {
            path: config.path.clone(),
        }
    }
}

#[async_trait]
impl TokenStore for FileStore {
    async fn get(&self) -> Result<Option<Token>, String> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let raw = contents.trim();
                if raw.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Token::new(raw)))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("failed to read token file {:?}: {}", self.path, e)),
        }
    }

    async fn set(&self, token: &Token) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("failed to create {:?}: {}", parent, e))?;
        }
        fs::write(&self.path, token.reveal())
            .await
            .map_err(|e| format!("failed to write token file {:?}: {}", self.path, e))?;
        debug!("Token written to {:?}", self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!(
                "failed to remove token file {:?}: {}",
                self.path, e
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(&FileStoreConfig {
            path: dir.path().join("session").join("token"),
        })
    }

    /// Test that a token written by one store instance is visible to a fresh
    /// instance on the same path.
    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let token = Token::new("persisted-token");

        store_at(&dir).set(&token).await.unwrap();
        let reopened = store_at(&dir);
        assert_eq!(reopened.get().await.unwrap(), Some(token));
    }

    /// Test that a missing file reads as "no token" rather than an error.
    #[tokio::test]
    async fn test_file_store_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_at(&dir).get().await.unwrap(), None);
    }

    /// Test that set overwrites and clear removes the file.
    #[tokio::test]
    async fn test_file_store_overwrite_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir);

        store.set(&Token::new("first")).await.unwrap();
        store.set(&Token::new("second")).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(Token::new("second")));

        store.clear().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
        // Clearing twice is fine.
        store.clear().await.unwrap();
    }
}
