//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the device:
//! - `storage` - Key-value stores (file-backed, in-memory)
//! - `notification` - Auto-dismissing banner presenter
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod notification;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use notification::{BannerPresenter, MOBILE_DISPLAY_DURATION, WEB_DISPLAY_DURATION};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
