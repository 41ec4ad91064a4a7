//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Local blob persistence (period log, profile)
//! - `NotificationPresenter` - Transient on-screen notices
//! - `Clock` - Current calendar date

mod clock;
mod key_value_store;
mod notification_presenter;

pub use clock::Clock;
pub use key_value_store::{KeyValueStore, StoreError, PERIOD_ENTRIES_KEY, USER_PROFILE_KEY};
pub use notification_presenter::NotificationPresenter;
