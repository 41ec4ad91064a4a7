//! Cycle parameter configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::cycle::{
    CycleSettings, CYCLE_LENGTH, PERIOD_DURATION, REMINDER_THRESHOLD, UPCOMING_WINDOW,
};

/// Overrides for the fixed cycle parameters
///
/// Every field defaults to the built-in value, so the section can be
/// omitted entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct CycleConfig {
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,

    #[serde(default = "default_period_duration")]
    pub period_duration: u32,

    #[serde(default = "default_reminder_threshold")]
    pub reminder_threshold: u32,

    #[serde(default = "default_upcoming_window")]
    pub upcoming_window: u32,
}

impl CycleConfig {
    /// The engine settings these values describe
    pub fn settings(&self) -> CycleSettings {
        CycleSettings {
            cycle_length: self.cycle_length,
            period_duration: self.period_duration,
            reminder_threshold: self.reminder_threshold,
            upcoming_window: self.upcoming_window,
        }
    }

    /// Validate cycle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.settings()
            .validate()
            .map_err(|e| ValidationError::InvalidCycleSettings(e.to_string()))
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            cycle_length: default_cycle_length(),
            period_duration: default_period_duration(),
            reminder_threshold: default_reminder_threshold(),
            upcoming_window: default_upcoming_window(),
        }
    }
}

fn default_cycle_length() -> u32 {
    CYCLE_LENGTH
}

fn default_period_duration() -> u32 {
    PERIOD_DURATION
}

fn default_reminder_threshold() -> u32 {
    REMINDER_THRESHOLD
}

fn default_upcoming_window() -> u32 {
    UPCOMING_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_defaults_match_engine_defaults() {
        let config = CycleConfig::default();
        assert_eq!(config.settings(), CycleSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config: CycleConfig = serde_json::from_str(r#"{"cycle_length": 30}"#).unwrap();
        assert_eq!(config.cycle_length, 30);
        assert_eq!(config.period_duration, PERIOD_DURATION);
    }

    #[test]
    fn test_period_longer_than_cycle_fails() {
        let config = CycleConfig {
            cycle_length: 7,
            period_duration: 7,
            ..CycleConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("period_duration"));
    }
}
