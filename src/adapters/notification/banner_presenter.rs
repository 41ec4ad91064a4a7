//! Banner presenter - keeps the notice currently on screen.
//!
//! A shell polls [`BannerPresenter::current`] (or renders on change) and
//! draws the banner. Each new notice replaces the previous one and restarts
//! the dismissal timer; the user can close it early with `dismiss`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::domain::cycle::Notice;
use crate::ports::NotificationPresenter;

/// Web banner stays for five seconds.
pub const WEB_DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// Mobile banner: 300 ms fade-in, 4 s hold, 300 ms fade-out.
pub const MOBILE_DISPLAY_DURATION: Duration = Duration::from_millis(4600);

#[derive(Default)]
struct BannerState {
    current: Option<Notice>,
    /// Bumped on every present/dismiss so a stale timer cannot clear a newer banner.
    generation: u64,
    dismiss_task: Option<JoinHandle<()>>,
    presented: usize,
}

/// Auto-dismissing single-banner presenter.
#[derive(Clone)]
pub struct BannerPresenter {
    state: Arc<Mutex<BannerState>>,
    display_duration: Duration,
}

impl BannerPresenter {
    /// Creates a presenter that dismisses banners after `display_duration`.
    pub fn new(display_duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(BannerState::default())),
            display_duration,
        }
    }

    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }

    /// The notice on screen, if any.
    pub async fn current(&self) -> Option<Notice> {
        self.state.lock().await.current.clone()
    }

    /// Total notices presented so far.
    pub async fn presented_count(&self) -> usize {
        self.state.lock().await.presented
    }

    /// Closes the banner before its timer runs out.
    pub async fn dismiss(&self) {
        let mut state = self.state.lock().await;
        if let Some(task) = state.dismiss_task.take() {
            task.abort();
        }
        state.generation += 1;
        if state.current.take().is_some() {
            debug!("Notification dismissed by user");
        }
    }
}

impl std::fmt::Debug for BannerPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerPresenter")
            .field("display_duration", &self.display_duration)
            .finish()
    }
}

#[async_trait]
impl NotificationPresenter for BannerPresenter {
    async fn present(&self, notice: Notice) {
        let mut state = self.state.lock().await;
        if let Some(task) = state.dismiss_task.take() {
            task.abort();
        }

        info!(kind = ?notice.kind, message = %notice.message, "Presenting notification");

        state.generation += 1;
        state.presented += 1;
        state.current = Some(notice);

        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let delay = self.display_duration;
        state.dismiss_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.lock().await;
            if state.generation == generation {
                state.current = None;
                state.dismiss_task = None;
                debug!("Notification auto-dismissed");
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::NoticeKind;

    #[tokio::test(start_paused = true)]
    async fn shows_notice_until_timer_expires() {
        let presenter = BannerPresenter::new(WEB_DISPLAY_DURATION);
        presenter.present(Notice::logged_today()).await;

        assert_eq!(presenter.current().await, Some(Notice::logged_today()));

        tokio::time::sleep(Duration::from_millis(4900)).await;
        assert!(presenter.current().await.is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(presenter.current().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn new_notice_replaces_and_restarts_timer() {
        let presenter = BannerPresenter::new(MOBILE_DISPLAY_DURATION);
        presenter.present(Notice::removed()).await;

        tokio::time::sleep(Duration::from_millis(3000)).await;
        presenter.present(Notice::upcoming(2)).await;

        // The first timer would have fired here
        tokio::time::sleep(Duration::from_millis(2000)).await;
        let current = presenter.current().await.unwrap();
        assert_eq!(current.kind, NoticeKind::Info);
        assert!(current.message.contains("2 hari lagi"));

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(presenter.current().await.is_none());
        assert_eq!(presenter.presented_count().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_clears_immediately() {
        let presenter = BannerPresenter::new(WEB_DISPLAY_DURATION);
        presenter.present(Notice::overdue_reminder()).await;

        presenter.dismiss().await;

        assert!(presenter.current().await.is_none());
    }
}
