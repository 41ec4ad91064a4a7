//! Clock port - where "today" comes from.
//!
//! Domain logic takes `today` as a parameter. Only the application layer and
//! the reminder scheduler ask a clock, so tests can pin the date.

use crate::domain::foundation::CalendarDate;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}
