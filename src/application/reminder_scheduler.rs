//! ReminderScheduler - Background task that runs the reminder check.
//!
//! The reminder decision itself is pure; this service decides *when* to
//! evaluate it. A check is scheduled when the scheduler starts and again
//! after every change to the period log. Each change pushes the pending
//! check back, so a burst of taps produces a single check once the log has
//! settled.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `settle_delay` | 1000ms | Quiet time after the last change before checking |
//! | `enabled` | true | When false, `run` returns at once without checking |
//!
//! ## Shutdown
//!
//! The loop stops when the shutdown channel carries `true` or its sender is
//! dropped. A pending check is discarded.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use super::handlers::{CheckReminderCommand, CheckReminderHandler, TrackerSession};
use crate::domain::cycle::ReminderDecision;
use crate::ports::Clock;

/// Configuration for the ReminderScheduler service.
#[derive(Debug, Clone)]
pub struct ReminderSchedulerConfig {
    /// Quiet time after the last log change before the check runs.
    pub settle_delay: Duration,
    /// Whether the background loop runs at all.
    pub enabled: bool,
}

impl Default for ReminderSchedulerConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(1000),
            enabled: true,
        }
    }
}

impl ReminderSchedulerConfig {
    /// Create config with a custom settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Create config with the loop switched on or off.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Debounced reminder checks driven by log changes.
pub struct ReminderScheduler {
    handler: Arc<CheckReminderHandler>,
    session: Arc<TrackerSession>,
    clock: Arc<dyn Clock>,
    config: ReminderSchedulerConfig,
}

impl ReminderScheduler {
    pub fn new(
        handler: Arc<CheckReminderHandler>,
        session: Arc<TrackerSession>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_config(handler, session, clock, ReminderSchedulerConfig::default())
    }

    pub fn with_config(
        handler: Arc<CheckReminderHandler>,
        session: Arc<TrackerSession>,
        clock: Arc<dyn Clock>,
        config: ReminderSchedulerConfig,
    ) -> Self {
        Self {
            handler,
            session,
            clock,
            config,
        }
    }

    /// Run the scheduling loop until shutdown.
    ///
    /// Returns immediately when the scheduler is disabled; `check_now`
    /// still works.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        if !self.config.enabled {
            info!("Reminder scheduler disabled");
            return;
        }

        let mut changes = self.session.subscribe();
        let mut deadline = Some(Instant::now() + self.config.settle_delay);
        info!(
            settle_delay_ms = self.config.settle_delay.as_millis() as u64,
            "Reminder scheduler started"
        );

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Reminder scheduler stopped");
                        return;
                    }
                }

                changed = changes.changed() => {
                    if changed.is_err() {
                        info!("Tracker session closed, reminder scheduler stopped");
                        return;
                    }
                    let revision = *changes.borrow_and_update();
                    debug!(revision, "Log changed, rescheduling reminder check");
                    deadline = Some(Instant::now() + self.config.settle_delay);
                }

                _ = sleep_until(deadline) => {
                    deadline = None;
                    self.check_now().await;
                }
            }
        }
    }

    /// Run one reminder check for the clock's current date.
    pub async fn check_now(&self) -> ReminderDecision {
        let today = self.clock.today();
        self.handler.handle(CheckReminderCommand { today }).await
    }
}

/// Sleeps until `deadline`, or forever when nothing is scheduled.
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
