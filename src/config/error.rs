//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid cycle settings: {0}")]
    InvalidCycleSettings(String),

    #[error("Notification display duration must be between 1 and 60000 ms")]
    InvalidDisplayDuration,

    #[error("Reminder settle delay must not exceed 60000 ms")]
    InvalidSettleDelay,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
