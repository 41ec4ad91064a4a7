//! Tracker command and query handlers.

mod check_reminder;
mod get_overview;
mod session;
mod sign_in_today;
mod toggle_date;

pub use check_reminder::{CheckReminderCommand, CheckReminderHandler};
pub use get_overview::{GetTrackerOverviewHandler, GetTrackerOverviewQuery, TrackerOverview};
pub use session::TrackerSession;
pub use sign_in_today::{SignInResult, SignInTodayCommand, SignInTodayHandler};
pub use toggle_date::{ToggleDateCommand, ToggleDateHandler, ToggleDateResult};
