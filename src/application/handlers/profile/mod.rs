//! Profile command and query handlers.

mod get_profile;
mod save_profile;

pub use get_profile::GetProfileHandler;
pub use save_profile::{SaveProfileCommand, SaveProfileHandler};
