//! PeriodInterval value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CalendarDate;

/// A logged period: a fixed-length run of days beginning at `start_date`.
///
/// # Invariants
///
/// - `end_date = start_date + (period_duration - 1)` when created here
/// - Never edited in place; removed wholesale when toggled off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodInterval {
    start_date: CalendarDate,
    end_date: CalendarDate,
}

impl PeriodInterval {
    /// Creates an interval of `period_duration` days starting at `start_date`.
    pub fn starting_on(start_date: CalendarDate, period_duration: u32) -> Self {
        let span = period_duration.max(1) as i64 - 1;
        Self {
            start_date,
            end_date: start_date.add_days(span),
        }
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    /// Whether `date` lies in `[start_date, end_date]`.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }

    /// Whether the two intervals share at least one day.
    pub fn overlaps(&self, other: &PeriodInterval) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Number of days covered, both ends included.
    pub fn length_days(&self) -> i64 {
        self.start_date.days_until(&self.end_date) + 1
    }
}
