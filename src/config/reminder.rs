//! Reminder scheduling configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::ReminderSchedulerConfig;

/// Reminder scheduling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderConfig {
    /// Quiet time after the last log change before a reminder check runs
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl ReminderConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Scheduler configuration built from these values
    pub fn scheduler_config(&self) -> ReminderSchedulerConfig {
        ReminderSchedulerConfig::default().with_settle_delay(self.settle_delay())
    }

    /// Validate reminder configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.settle_delay_ms > 60_000 {
            return Err(ValidationError::InvalidSettleDelay);
        }
        Ok(())
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

fn default_settle_delay_ms() -> u64 {
    1000
}
