//! KeyValueStore port - local blob storage for the tracker.
//!
//! Both shells persist through a device-local key-value API. The core only
//! needs "load a blob by key" and "save a blob under a key"; how and where
//! the blob lives is the adapter's business.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Key holding the serialized period log.
pub const PERIOD_ENTRIES_KEY: &str = "symple_period_entries";

/// Key holding the serialized user profile.
pub const USER_PROFILE_KEY: &str = "symple_user_profile";

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    #[error("Failed to serialize value: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::SerializationFailed(_) => ErrorCode::CorruptRecord,
            StoreError::InvalidKey(_) | StoreError::IoError(_) => ErrorCode::StorageUnavailable,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for loading and saving string blobs by key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the blob stored under `key`.
    ///
    /// # Returns
    /// `None` when nothing has been stored yet
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `blob` under `key`, replacing any previous value.
    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}
