//! CycleLog - the ordered store of logged period intervals.
//!
//! The log changes through [`CycleLog::log_or_toggle`], where a date inside an
//! existing interval retracts that interval and any other date starts a new
//! one, or through [`CycleLog::insert_period`], which only ever adds.
//!
//! # Invariants
//!
//! - Intervals are sorted by `start_date` ascending
//! - No two intervals share a day
//! - The last interval is the most recently started cycle

use serde::{Deserialize, Serialize};

use super::interval::PeriodInterval;
use super::notice::Notice;
use super::settings::CycleSettings;
use crate::domain::foundation::CalendarDate;

/// What a toggle did to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A new interval starting at the toggled date was inserted.
    Added {
        interval: PeriodInterval,
        /// The toggled date was `today`.
        logged_today: bool,
    },
    /// The interval containing the toggled date was removed.
    Removed { interval: PeriodInterval },
    /// A new interval would run into `conflict`; the log is unchanged.
    Rejected { conflict: PeriodInterval },
}

impl ToggleOutcome {
    /// Whether the log was modified.
    pub fn changed_log(&self) -> bool {
        !matches!(self, ToggleOutcome::Rejected { .. })
    }

    /// The notice confirming this outcome to the user.
    pub fn notice(&self) -> Notice {
        match self {
            ToggleOutcome::Added {
                logged_today: true,
                ..
            } => Notice::logged_today(),
            ToggleOutcome::Added { interval, .. } => Notice::logged_on(&interval.start_date()),
            ToggleOutcome::Removed { .. } => Notice::removed(),
            ToggleOutcome::Rejected { conflict } => {
                Notice::overlaps_existing(&conflict.start_date())
            }
        }
    }
}

/// What an insert-only call did to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new interval starting at the date was inserted.
    Inserted { interval: PeriodInterval },
    /// The date already lies inside `interval`; the log is unchanged.
    AlreadyCovered { interval: PeriodInterval },
    /// A new interval would run into `conflict`; the log is unchanged.
    Rejected { conflict: PeriodInterval },
}

impl InsertOutcome {
    /// Whether the log was modified.
    pub fn changed_log(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }
}

/// Ordered sequence of period intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleLog {
    intervals: Vec<PeriodInterval>,
}

impl CycleLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from intervals in any order.
    pub fn from_intervals(mut intervals: Vec<PeriodInterval>) -> Self {
        intervals.sort_by_key(|i| i.start_date());
        Self { intervals }
    }

    /// Parses the stored JSON array of `{startDate, endDate}` records.
    ///
    /// Records are re-sorted by start date; older web builds appended
    /// without sorting.
    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        let intervals: Vec<PeriodInterval> = serde_json::from_str(blob)?;
        Ok(Self::from_intervals(intervals))
    }

    /// Serializes to the stored JSON array format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.intervals)
    }

    pub fn intervals(&self) -> &[PeriodInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The most recently started interval.
    pub fn last(&self) -> Option<&PeriodInterval> {
        self.intervals.last()
    }

    /// The interval containing `date`, if any.
    pub fn find_containing(&self, date: &CalendarDate) -> Option<&PeriodInterval> {
        self.intervals.iter().find(|i| i.contains(date))
    }

    /// Whether any interval contains `date`.
    pub fn covers(&self, date: &CalendarDate) -> bool {
        self.find_containing(date).is_some()
    }

    /// Retracts the interval containing `date`, or starts a new one there.
    ///
    /// A new interval that would reach into a later interval is rejected
    /// rather than inserted, so no two intervals ever share a day.
    pub fn log_or_toggle(
        &mut self,
        date: CalendarDate,
        today: CalendarDate,
        settings: &CycleSettings,
    ) -> ToggleOutcome {
        if let Some(idx) = self.intervals.iter().position(|i| i.contains(&date)) {
            let interval = self.intervals.remove(idx);
            return ToggleOutcome::Removed { interval };
        }

        match self.try_insert(date, settings) {
            Ok(interval) => ToggleOutcome::Added {
                interval,
                logged_today: date == today,
            },
            Err(conflict) => ToggleOutcome::Rejected { conflict },
        }
    }

    /// Starts a new interval at `date` unless the date is already covered.
    ///
    /// Never removes anything.
    pub fn insert_period(&mut self, date: CalendarDate, settings: &CycleSettings) -> InsertOutcome {
        if let Some(interval) = self.find_containing(&date) {
            return InsertOutcome::AlreadyCovered {
                interval: *interval,
            };
        }

        match self.try_insert(date, settings) {
            Ok(interval) => InsertOutcome::Inserted { interval },
            Err(conflict) => InsertOutcome::Rejected { conflict },
        }
    }

    /// Inserts a fresh interval at `date`, or returns the interval it would overlap.
    fn try_insert(
        &mut self,
        date: CalendarDate,
        settings: &CycleSettings,
    ) -> Result<PeriodInterval, PeriodInterval> {
        let interval = PeriodInterval::starting_on(date, settings.period_duration);
        if let Some(conflict) = self.intervals.iter().find(|i| i.overlaps(&interval)) {
            return Err(*conflict);
        }

        self.intervals.push(interval);
        self.intervals.sort_by_key(|i| i.start_date());
        Ok(interval)
    }
}
