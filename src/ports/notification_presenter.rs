//! NotificationPresenter port - shows transient notices to the user.
//!
//! The core decides whether to notify and with which message; rendering,
//! animation and dismissal timing belong to the presenter.

use async_trait::async_trait;

use crate::domain::cycle::Notice;

/// Port for displaying a notice.
///
/// Implementations must:
/// - Replace any notice still on screen
/// - Dismiss on their own after a fixed duration
#[async_trait]
pub trait NotificationPresenter: Send + Sync {
    /// Show `notice`.
    async fn present(&self, notice: Notice);
}
