//! SignInTodayHandler - Command handler for the "log today" button.
//!
//! Only today can be logged this way. Unlike a calendar tap this never
//! retracts: a day already covered by a logged period is answered with a
//! notice and the log is left alone.

use std::sync::Arc;

use tracing::debug;

use super::session::TrackerSession;
use crate::domain::cycle::{InsertOutcome, Notice, PeriodInterval};
use crate::domain::foundation::CalendarDate;
use crate::ports::NotificationPresenter;

/// Command to log today.
#[derive(Debug, Clone, Copy)]
pub struct SignInTodayCommand {
    pub today: CalendarDate,
}

/// Result of a sign-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInResult {
    /// A new period starting today was logged.
    Logged { interval: PeriodInterval },
    /// Today was already inside a logged period.
    AlreadyLogged,
    /// Today would run into a later logged period.
    Rejected { conflict: PeriodInterval },
}

/// Handler for logging today.
pub struct SignInTodayHandler {
    session: Arc<TrackerSession>,
    presenter: Arc<dyn NotificationPresenter>,
}

impl SignInTodayHandler {
    pub fn new(session: Arc<TrackerSession>, presenter: Arc<dyn NotificationPresenter>) -> Self {
        Self { session, presenter }
    }

    pub async fn handle(&self, cmd: SignInTodayCommand) -> SignInResult {
        let (result, notice) = match self.session.log_today(cmd.today).await {
            InsertOutcome::Inserted { interval } => {
                (SignInResult::Logged { interval }, Notice::logged_today())
            }
            InsertOutcome::AlreadyCovered { interval } => {
                debug!(today = %cmd.today, start = %interval.start_date(), "Already logged");
                (SignInResult::AlreadyLogged, Notice::already_logged_today())
            }
            InsertOutcome::Rejected { conflict } => (
                SignInResult::Rejected { conflict },
                Notice::overlaps_existing(&conflict.start_date()),
            ),
        };

        self.presenter.present(notice).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKeyValueStore;
    use crate::domain::cycle::{CycleSettings, NoticeKind};
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

    fn presenter_last(presenter: &MockPresenter) -> Notice {
        presenter.notices.lock().unwrap().last().cloned().unwrap()
    }

    async fn setup() -> (SignInTodayHandler, Arc<TrackerSession>, Arc<MockPresenter>) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let session = Arc::new(TrackerSession::open(store, CycleSettings::default()).await);
        let presenter = Arc::new(MockPresenter {
            notices: Mutex::new(Vec::new()),
        });
        let handler = SignInTodayHandler::new(session.clone(), presenter.clone());
        (handler, session, presenter)
    }

    #[tokio::test]
    async fn logs_today_on_empty_log() {
        let (handler, session, presenter) = setup().await;
        let today = date("2024-01-01");

        let result = handler.handle(SignInTodayCommand { today }).await;

        assert_eq!(
            result,
            SignInResult::Logged {
                interval: PeriodInterval::starting_on(today, 7)
            }
        );
        assert_eq!(session.snapshot().await.len(), 1);
        assert_eq!(
            presenter.notices.lock().unwrap().clone(),
            vec![Notice::logged_today()]
        );
    }

    #[tokio::test]
    async fn second_sign_in_does_not_toggle_off() {
        let (handler, session, presenter) = setup().await;

        handler
            .handle(SignInTodayCommand {
                today: date("2024-01-01"),
            })
            .await;
        let result = handler
            .handle(SignInTodayCommand {
                today: date("2024-01-03"),
            })
            .await;

        assert_eq!(result, SignInResult::AlreadyLogged);
        assert_eq!(session.snapshot().await.len(), 1);
        let notices = presenter.notices.lock().unwrap().clone();
        assert_eq!(notices[1], Notice::already_logged_today());
        assert_eq!(notices[1].kind, NoticeKind::Info);
    }

    #[tokio::test]
    async fn sign_in_running_into_later_period_is_rejected() {
        let (handler, session, presenter) = setup().await;
        session.toggle(date("2024-01-05"), date("2024-01-02")).await;

        let result = handler
            .handle(SignInTodayCommand {
                today: date("2024-01-02"),
            })
            .await;

        assert!(matches!(result, SignInResult::Rejected { .. }));
        assert_eq!(session.snapshot().await.len(), 1);
        assert!(presenter_last(&presenter).message.contains("5 Januari"));
    }

    #[tokio::test]
    async fn sign_in_on_covered_back_dated_period_keeps_it() {
        let (handler, session, presenter) = setup().await;
        session.toggle(date("2024-01-01"), date("2024-01-04")).await;
        let before = session.snapshot().await;

        let result = handler
            .handle(SignInTodayCommand {
                today: date("2024-01-04"),
            })
            .await;

        assert_eq!(result, SignInResult::AlreadyLogged);
        assert_eq!(session.snapshot().await, before);
        assert_eq!(presenter_last(&presenter), Notice::already_logged_today());
    }
}
