//! Notification banner configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::{MOBILE_DISPLAY_DURATION, WEB_DISPLAY_DURATION};

/// Which front-end the core is running behind
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    #[default]
    Web,
    Mobile,
}

/// Notification banner configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct NotificationConfig {
    /// Front-end whose banner timing applies
    #[serde(default)]
    pub shell: Shell,

    /// Explicit display duration, overriding the shell's default
    pub display_ms: Option<u64>,
}

impl NotificationConfig {
    /// How long a banner stays on screen
    pub fn display_duration(&self) -> Duration {
        match (self.display_ms, self.shell) {
            (Some(ms), _) => Duration::from_millis(ms),
            (None, Shell::Web) => WEB_DISPLAY_DURATION,
            (None, Shell::Mobile) => MOBILE_DISPLAY_DURATION,
        }
    }

    /// Validate notification configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.display_ms {
            Some(ms) if ms == 0 || ms > 60_000 => Err(ValidationError::InvalidDisplayDuration),
            _ => Ok(()),
        }
    }
}
