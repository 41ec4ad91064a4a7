//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SYMPLE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use symple::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storing data in {}", config.storage.data_dir.display());
//! ```

mod cycle;
mod error;
mod features;
mod notification;
mod reminder;
mod storage;

pub use cycle::CycleConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use notification::{NotificationConfig, Shell};
pub use reminder::ReminderConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::application::ReminderSchedulerConfig;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Local blob storage (data directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cycle parameter overrides
    #[serde(default)]
    pub cycle: CycleConfig,

    /// Banner timing
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Reminder scheduling
    #[serde(default)]
    pub reminder: ReminderConfig,

    /// Feature flags and logging
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SYMPLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SYMPLE__STORAGE__DATA_DIR=/var/lib/symple` -> `storage.data_dir`
    /// - `SYMPLE__CYCLE__CYCLE_LENGTH=30` -> `cycle.cycle_length = 30`
    /// - `SYMPLE__NOTIFICATION__SHELL=mobile` -> `notification.shell`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SYMPLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.cycle.validate()?;
        self.notification.validate()?;
        self.reminder.validate()?;
        self.features.validate()?;
        Ok(())
    }

    /// Scheduler configuration, switched off when reminders are disabled
    pub fn reminder_scheduler_config(&self) -> ReminderSchedulerConfig {
        self.reminder
            .scheduler_config()
            .with_enabled(self.features.enable_reminders)
    }
}
