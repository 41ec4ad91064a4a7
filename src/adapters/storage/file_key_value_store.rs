//! File-based Key-Value Store Adapter
//!
//! Stores each key as a JSON file on disk: `{base_path}/{key}.json`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueStore, StoreError};

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a key
    ///
    /// Keys are restricted to `[A-Za-z0-9_-]` so they cannot escape the
    /// base directory.
    fn file_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| {
                StoreError::IoError(format!("Failed to create directory: {}", e))
            })
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let file_path = self.file_path(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let blob = fs::read_to_string(&file_path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        Ok(Some(blob))
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let file_path = self.file_path(key)?;
        self.ensure_dir().await?;

        // Write atomically using a temporary file
        let temp_path = file_path.with_extension("json.tmp");
        fs::write(&temp_path, blob).await.map_err(|e| {
            StoreError::IoError(format!("Failed to write temporary file: {}", e))
        })?;

        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| {
                StoreError::IoError(format!("Failed to rename file: {}", e))
            })?;

        Ok(())
    }
}
