//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer drives the cycle domain on behalf of the shells. Command
//! handlers mutate the shared [`TrackerSession`]; query handlers read
//! snapshots of it. The [`ReminderScheduler`] runs reminder checks in the
//! background as the log changes.

pub mod handlers;
mod reminder_scheduler;

pub use handlers::{
    CheckReminderCommand, CheckReminderHandler, GetProfileHandler, GetTrackerOverviewHandler,
    GetTrackerOverviewQuery, SaveProfileCommand, SaveProfileHandler, SignInResult,
    SignInTodayCommand, SignInTodayHandler, ToggleDateCommand, ToggleDateHandler, ToggleDateResult,
    TrackerOverview, TrackerSession,
};
pub use reminder_scheduler::{ReminderScheduler, ReminderSchedulerConfig};
