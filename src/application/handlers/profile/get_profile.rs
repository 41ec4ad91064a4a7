//! GetProfileHandler - Query handler for the stored user profile.

use std::sync::Arc;

use tracing::warn;

use crate::domain::profile::UserProfile;
use crate::ports::{KeyValueStore, USER_PROFILE_KEY};

/// Handler for loading the profile.
///
/// Nothing stored, an unreadable blob or a failing store all yield the
/// empty default profile.
pub struct GetProfileHandler {
    store: Arc<dyn KeyValueStore>,
}

impl GetProfileHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> UserProfile {
        match self.store.load(USER_PROFILE_KEY).await {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                warn!(error = %e, "Stored profile is malformed, using default");
                UserProfile::default()
            }),
            Ok(None) => UserProfile::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read profile, using default");
                UserProfile::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKeyValueStore;

    #[tokio::test]
    async fn missing_profile_is_default() {
        let handler = GetProfileHandler::new(Arc::new(InMemoryKeyValueStore::new()));
        let profile = handler.handle().await;
        assert!(profile.is_blank());
    }

    #[tokio::test]
    async fn reads_stored_profile() {
        let store = InMemoryKeyValueStore::with_entry(
            USER_PROFILE_KEY,
            r#"{"name":"Sari","age":"24","avatarUri":"file:///a.png"}"#,
        );
        let handler = GetProfileHandler::new(Arc::new(store));

        let profile = handler.handle().await;

        assert_eq!(profile.name, "Sari");
        assert_eq!(profile.age, "24");
        assert_eq!(profile.avatar_uri.as_deref(), Some("file:///a.png"));
    }

    #[tokio::test]
    async fn reads_web_avatar_field() {
        let store = InMemoryKeyValueStore::with_entry(
            USER_PROFILE_KEY,
            r#"{"name":"Sari","avatarUrl":"data:image/png;base64,AA=="}"#,
        );
        let handler = GetProfileHandler::new(Arc::new(store));

        let profile = handler.handle().await;

        assert_eq!(profile.age, "");
        assert!(profile.avatar_uri.unwrap().starts_with("data:image/png"));
    }

    #[tokio::test]
    async fn malformed_profile_is_default() {
        let store = InMemoryKeyValueStore::with_entry(USER_PROFILE_KEY, "[1,2");
        let handler = GetProfileHandler::new(Arc::new(store));
        assert_eq!(handler.handle().await, UserProfile::default());
    }
}
