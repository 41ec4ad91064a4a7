//! Clock adapters.

use std::sync::{Arc, RwLock};

use crate::domain::foundation::CalendarDate;
use crate::ports::Clock;

/// Reads the device's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::today_local()
    }
}

/// A clock pinned to a date that tests can move.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Arc<RwLock<CalendarDate>>,
}

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            today: Arc::new(RwLock::new(today)),
        }
    }

    /// Moves the clock to `today`.
    pub fn set(&self, today: CalendarDate) {
        match self.today.write() {
            Ok(mut guard) => *guard = today,
            Err(poisoned) => *poisoned.into_inner() = today,
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        match self.today.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
