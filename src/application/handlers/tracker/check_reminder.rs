//! CheckReminderHandler - evaluates the reminder decision and presents it.

use std::sync::Arc;

use tracing::debug;

use super::session::TrackerSession;
use crate::domain::cycle::{CycleEngine, ReminderDecision};
use crate::domain::foundation::CalendarDate;
use crate::ports::NotificationPresenter;

/// Command to run one reminder check.
#[derive(Debug, Clone, Copy)]
pub struct CheckReminderCommand {
    pub today: CalendarDate,
}

/// Handler for reminder checks. Never mutates the log.
pub struct CheckReminderHandler {
    session: Arc<TrackerSession>,
    presenter: Arc<dyn NotificationPresenter>,
}

impl CheckReminderHandler {
    pub fn new(session: Arc<TrackerSession>, presenter: Arc<dyn NotificationPresenter>) -> Self {
        Self { session, presenter }
    }

    pub async fn handle(&self, cmd: CheckReminderCommand) -> ReminderDecision {
        let log = self.session.snapshot().await;
        let decision = CycleEngine::new(&log, self.session.settings()).decide_reminder(&cmd.today);
        debug!(today = %cmd.today, decision = ?decision, "Reminder checked");

        if let Some(notice) = decision.notice() {
            self.presenter.present(notice).await;
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKeyValueStore;
    use crate::domain::cycle::{CycleSettings, Notice, NoticeKind};
    use crate::ports::PERIOD_ENTRIES_KEY;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPresenter {
        notices: Mutex<Vec<Notice>>,
    }

    #[async_trait]
    impl NotificationPresenter for MockPresenter {
        async fn present(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    async fn handler_with(blob: Option<&str>) -> (CheckReminderHandler, Arc<MockPresenter>) {
        let store = match blob {
            Some(blob) => InMemoryKeyValueStore::with_entry(PERIOD_ENTRIES_KEY, blob),
            None => InMemoryKeyValueStore::new(),
        };
        let session = TrackerSession::open(Arc::new(store), CycleSettings::default()).await;
        let session = Arc::new(session);
        let presenter = Arc::new(MockPresenter {
            notices: Mutex::new(Vec::new()),
        });
        (CheckReminderHandler::new(session, presenter.clone()), presenter)
    }

    const JANUARY: &str = r#"[{"startDate":"2024-01-01","endDate":"2024-01-07"}]"#;

    #[tokio::test]
    async fn empty_log_presents_nothing() {
        let (handler, presenter) = handler_with(None).await;

        let decision = handler
            .handle(CheckReminderCommand {
                today: date("2024-01-31"),
            })
            .await;

        assert_eq!(decision, ReminderDecision::NoReminder);
        assert!(presenter.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn overdue_presents_reminder() {
        let (handler, presenter) = handler_with(Some(JANUARY)).await;

        let decision = handler
            .handle(CheckReminderCommand {
                today: date("2024-01-31"),
            })
            .await;

        assert_eq!(decision, ReminderDecision::Overdue { days_overdue: 2 });
        let notices = presenter.notices.lock().unwrap().clone();
        assert_eq!(notices, vec![Notice::overdue_reminder()]);
        assert_eq!(notices[0].kind, NoticeKind::Reminder);
    }

    #[tokio::test]
    async fn upcoming_presents_countdown() {
        let (handler, presenter) = handler_with(Some(JANUARY)).await;

        let decision = handler
            .handle(CheckReminderCommand {
                today: date("2024-01-28"),
            })
            .await;

        assert_eq!(decision, ReminderDecision::Upcoming { days_until: 1 });
        assert_eq!(
            presenter.notices.lock().unwrap()[0].message,
            "🌷 Siklus menstruasimu diperkirakan 1 hari lagi. Bersiap ya!"
        );
    }

    #[tokio::test]
    async fn in_period_is_suppressed() {
        let (handler, presenter) = handler_with(Some(JANUARY)).await;

        let decision = handler
            .handle(CheckReminderCommand {
                today: date("2024-01-03"),
            })
            .await;

        assert_eq!(decision, ReminderDecision::Suppressed);
        assert!(presenter.notices.lock().unwrap().is_empty());
    }
}
