//! Fixed cycle parameters.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Expected days between consecutive period starts.
pub const CYCLE_LENGTH: u32 = 28;

/// Days a logged period interval spans.
pub const PERIOD_DURATION: u32 = 7;

/// Days past the expected start that still count as the reminder window.
pub const REMINDER_THRESHOLD: u32 = 5;

/// Days ahead of the expected start in which the upcoming notice fires.
pub const UPCOMING_WINDOW: u32 = 3;

/// Cycle parameters used by the engine.
///
/// Not user-editable; deployments may override them through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSettings {
    pub cycle_length: u32,
    pub period_duration: u32,
    pub reminder_threshold: u32,
    pub upcoming_window: u32,
}

impl CycleSettings {
    /// Checks the parameters describe a usable cycle.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if a length is zero, or a period is not shorter than
    ///   the cycle it belongs to
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cycle_length == 0 || self.cycle_length > 90 {
            return Err(ValidationError::out_of_range(
                "cycle_length",
                1,
                90,
                self.cycle_length as i64,
            ));
        }
        if self.period_duration == 0 || self.period_duration >= self.cycle_length {
            return Err(ValidationError::out_of_range(
                "period_duration",
                1,
                self.cycle_length as i64 - 1,
                self.period_duration as i64,
            ));
        }
        if self.reminder_threshold >= self.cycle_length {
            return Err(ValidationError::out_of_range(
                "reminder_threshold",
                0,
                self.cycle_length as i64 - 1,
                self.reminder_threshold as i64,
            ));
        }
        if self.upcoming_window >= self.cycle_length {
            return Err(ValidationError::out_of_range(
                "upcoming_window",
                0,
                self.cycle_length as i64 - 1,
                self.upcoming_window as i64,
            ));
        }
        Ok(())
    }
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            cycle_length: CYCLE_LENGTH,
            period_duration: PERIOD_DURATION,
            reminder_threshold: REMINDER_THRESHOLD,
            upcoming_window: UPCOMING_WINDOW,
        }
    }
}
