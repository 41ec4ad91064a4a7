//! SaveProfileHandler - Command handler for the profile form.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::{KeyValueStore, StoreError, USER_PROFILE_KEY};

/// Command to replace the stored profile.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub name: String,
    pub age: String,
    pub avatar_uri: Option<String>,
}

/// Handler for saving the profile.
pub struct SaveProfileHandler {
    store: Arc<dyn KeyValueStore>,
}

impl SaveProfileHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<UserProfile, DomainError> {
        let profile = UserProfile {
            name: cmd.name.trim().to_string(),
            age: cmd.age.trim().to_string(),
            avatar_uri: cmd.avatar_uri.filter(|uri| !uri.trim().is_empty()),
        };

        let blob = serde_json::to_string(&profile)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        self.store.save(USER_PROFILE_KEY, &blob).await?;

        info!(has_avatar = profile.avatar_uri.is_some(), "Profile saved");
        Ok(profile)
    }
}
