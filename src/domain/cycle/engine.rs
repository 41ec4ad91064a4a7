//! CycleEngine - point-in-time queries over a cycle log.
//!
//! The engine borrows a log and settings and never reads the clock: every
//! question about "now" takes `today` as a parameter, so answers are pure
//! functions of `(log, settings, today)`.

use serde::{Deserialize, Serialize};

use super::interval::PeriodInterval;
use super::log::CycleLog;
use super::settings::CycleSettings;
use crate::domain::foundation::CalendarDate;

/// Expected start of the next cycle relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPeriodPrediction {
    pub expected_date: CalendarDate,
    /// Positive: in the future. Zero: expected today. Negative: overdue.
    pub days_until: i64,
}

impl NextPeriodPrediction {
    pub fn is_overdue(&self) -> bool {
        self.days_until < 0
    }
}

/// Read-only query view over a [`CycleLog`].
#[derive(Debug, Clone, Copy)]
pub struct CycleEngine<'a> {
    log: &'a CycleLog,
    settings: &'a CycleSettings,
}

impl<'a> CycleEngine<'a> {
    pub fn new(log: &'a CycleLog, settings: &'a CycleSettings) -> Self {
        Self { log, settings }
    }

    pub fn log(&self) -> &'a CycleLog {
        self.log
    }

    pub fn settings(&self) -> &'a CycleSettings {
        self.settings
    }

    /// The most recently started interval.
    pub(crate) fn last_interval(&self) -> Option<&'a PeriodInterval> {
        self.log.last()
    }

    /// `date` lies inside some logged interval.
    pub fn is_period_day(&self, date: &CalendarDate) -> bool {
        self.log.covers(date)
    }

    /// `date` is the first day of some interval.
    pub fn is_period_start(&self, date: &CalendarDate) -> bool {
        self.log.intervals().iter().any(|i| i.start_date() == *date)
    }

    /// `date` is the last day of some interval.
    pub fn is_period_end(&self, date: &CalendarDate) -> bool {
        self.log.intervals().iter().any(|i| i.end_date() == *date)
    }

    /// `today` is inside any interval, not only the latest one.
    pub fn is_in_current_period(&self, today: &CalendarDate) -> bool {
        self.is_period_day(today)
    }

    /// 1-based day of the latest period, if `today` falls inside it.
    ///
    /// Only the last interval is consulted; an earlier interval that also
    /// contains `today` yields `None` here while
    /// [`is_in_current_period`](Self::is_in_current_period) is still true.
    pub fn current_cycle_day(&self, today: &CalendarDate) -> Option<u32> {
        let last = self.last_interval()?;
        let delta = last.start_date().days_until(today);
        if (0..self.settings.period_duration as i64).contains(&delta) {
            Some(delta as u32 + 1)
        } else {
            None
        }
    }

    /// Expected start of the next cycle, counted from the latest start.
    pub fn next_period_prediction(&self, today: &CalendarDate) -> Option<NextPeriodPrediction> {
        let last = self.last_interval()?;
        let cycle_length = self.settings.cycle_length as i64;
        let expected_date = last.start_date().add_days(cycle_length);
        Some(NextPeriodPrediction {
            expected_date,
            days_until: today.days_until(&expected_date),
        })
    }
}
