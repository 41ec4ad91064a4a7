//! ToggleDateHandler - Command handler for tapping a calendar day.
//!
//! Any date may be toggled. A date inside a logged period retracts the
//! whole period; any other date starts a new one.

use std::sync::Arc;

use super::session::TrackerSession;
use crate::domain::cycle::{Notice, ToggleOutcome};
use crate::domain::foundation::CalendarDate;
use crate::ports::NotificationPresenter;

/// Command to toggle a date in the period log.
#[derive(Debug, Clone, Copy)]
pub struct ToggleDateCommand {
    pub date: CalendarDate,
    pub today: CalendarDate,
}

/// Result of a toggle.
#[derive(Debug, Clone)]
pub struct ToggleDateResult {
    pub outcome: ToggleOutcome,
    pub notice: Notice,
}

/// Handler for toggling calendar dates.
pub struct ToggleDateHandler {
    session: Arc<TrackerSession>,
    presenter: Arc<dyn NotificationPresenter>,
}

impl ToggleDateHandler {
    pub fn new(session: Arc<TrackerSession>, presenter: Arc<dyn NotificationPresenter>) -> Self {
        Self { session, presenter }
    }

    pub async fn handle(&self, cmd: ToggleDateCommand) -> ToggleDateResult {
        let outcome = self.session.toggle(cmd.date, cmd.today).await;

        let notice = outcome.notice();
        self.presenter.present(notice.clone()).await;

        ToggleDateResult { outcome, notice }
    }
}
