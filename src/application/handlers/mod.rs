//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;
pub mod tracker;

pub use profile::{GetProfileHandler, SaveProfileCommand, SaveProfileHandler};
pub use tracker::{
    CheckReminderCommand, CheckReminderHandler, GetTrackerOverviewHandler,
    GetTrackerOverviewQuery, SignInResult, SignInTodayCommand, SignInTodayHandler,
    ToggleDateCommand, ToggleDateHandler, ToggleDateResult, TrackerOverview, TrackerSession,
};
