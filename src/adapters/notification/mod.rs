//! Notification Adapters
//!
//! Implementations of the NotificationPresenter port.

mod banner_presenter;

pub use banner_presenter::{BannerPresenter, MOBILE_DISPLAY_DURATION, WEB_DISPLAY_DURATION};
