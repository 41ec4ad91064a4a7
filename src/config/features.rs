//! Feature flags and logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Run the background reminder scheduler
    #[serde(default = "default_true")]
    pub enable_reminders: bool,

    /// Install the tracing subscriber at startup
    #[serde(default = "default_true")]
    pub enable_tracing: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Tracing filter directive; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl FeatureFlags {
    /// Validate feature flags
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.log_level)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_reminders: true,
            enable_tracing: true,
            json_logs: false,
            log_level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info,symple=debug".to_string()
}
