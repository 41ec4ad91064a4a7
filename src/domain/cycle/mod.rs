//! Cycle module - period log, prediction and reminder logic.
//!
//! A [`CycleLog`] holds the logged periods. [`CycleEngine`] is a read-only
//! view over a log that answers every question the shells ask: is a date a
//! period day, which day of the period is today, when is the next cycle
//! expected, is a reminder due, and how does a calendar month look.
//!
//! # Components
//!
//! - `PeriodInterval` - one logged period, fixed length
//! - `CycleLog` - ordered intervals, the toggle and insert-only mutations
//! - `CycleEngine` - queries, prediction, reminder decision, status, calendar
//! - `Notice` - fixed user-facing messages
//!
//! Nothing here reads the clock or performs I/O.

mod calendar;
mod engine;
mod history;
mod interval;
mod log;
mod notice;
mod reminder;
mod settings;
mod status;

pub use calendar::{DayCell, GridCell, MonthView};
pub use engine::{CycleEngine, NextPeriodPrediction};
pub use history::{HistoryEntry, DEFAULT_HISTORY_LIMIT};
pub use interval::PeriodInterval;
pub use log::{CycleLog, InsertOutcome, ToggleOutcome};
pub use notice::{Notice, NoticeKind};
pub use reminder::ReminderDecision;
pub use settings::{
    CycleSettings, CYCLE_LENGTH, PERIOD_DURATION, REMINDER_THRESHOLD, UPCOMING_WINDOW,
};
pub use status::CycleStatus;
