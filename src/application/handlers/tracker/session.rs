//! TrackerSession - the in-process model both shells drive.
//!
//! Holds the one live [`CycleLog`], loaded from the store once when the
//! session opens and written back after every mutation. Readers take
//! snapshots; writers go through the toggle methods so persistence and
//! change notification never get skipped.

use std::sync::Arc;

use tokio::sync::{watch, Mutex, RwLock, RwLockWriteGuard};
use tracing::{debug, info, warn};

use crate::domain::cycle::{CycleLog, CycleSettings, InsertOutcome, ToggleOutcome};
use crate::domain::foundation::CalendarDate;
use crate::ports::{KeyValueStore, StoreError, PERIOD_ENTRIES_KEY};

/// Live tracker state plus its persistence collaborator.
pub struct TrackerSession {
    log: RwLock<CycleLog>,
    settings: CycleSettings,
    store: Arc<dyn KeyValueStore>,
    /// Held for the duration of one save; queued in mutation order.
    save_lock: Mutex<()>,
    revision: watch::Sender<u64>,
}

impl TrackerSession {
    /// Opens a session, loading the stored log.
    ///
    /// A missing or unreadable blob is not an error: the session starts
    /// with an empty log.
    pub async fn open(store: Arc<dyn KeyValueStore>, settings: CycleSettings) -> Self {
        let log = Self::load_log(store.as_ref()).await;
        info!(entries = log.len(), "Tracker session opened");
        Self::with_log(store, settings, log)
    }

    /// Creates a session around an already-loaded log.
    pub fn with_log(store: Arc<dyn KeyValueStore>, settings: CycleSettings, log: CycleLog) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            log: RwLock::new(log),
            settings,
            store,
            save_lock: Mutex::new(()),
            revision,
        }
    }

    async fn load_log(store: &dyn KeyValueStore) -> CycleLog {
        match store.load(PERIOD_ENTRIES_KEY).await {
            Ok(Some(blob)) => CycleLog::from_json(&blob).unwrap_or_else(|e| {
                warn!(error = %e, "Stored period log is malformed, starting empty");
                CycleLog::new()
            }),
            Ok(None) => CycleLog::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read period log, starting empty");
                CycleLog::new()
            }
        }
    }

    pub fn settings(&self) -> &CycleSettings {
        &self.settings
    }

    /// A copy of the current log.
    pub async fn snapshot(&self) -> CycleLog {
        self.log.read().await.clone()
    }

    /// Receiver that changes whenever the log is mutated.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Number of mutations since the session opened.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Toggles `date` in the log (any-date policy).
    pub async fn toggle(&self, date: CalendarDate, today: CalendarDate) -> ToggleOutcome {
        let mut log = self.log.write().await;
        let outcome = log.log_or_toggle(date, today, &self.settings);
        if !outcome.changed_log() {
            debug!(date = %date, "Toggle rejected, log unchanged");
            return outcome;
        }

        info!(date = %date, outcome = ?outcome, entries = log.len(), "Period log updated");
        self.commit(log).await;
        outcome
    }

    /// Logs `today` unless it is already inside a logged period.
    ///
    /// Never retracts: a covered day comes back as
    /// [`InsertOutcome::AlreadyCovered`] with the log untouched.
    pub async fn log_today(&self, today: CalendarDate) -> InsertOutcome {
        let mut log = self.log.write().await;
        let outcome = log.insert_period(today, &self.settings);
        if !outcome.changed_log() {
            debug!(today = %today, outcome = ?outcome, "Today not logged, log unchanged");
            return outcome;
        }

        info!(today = %today, entries = log.len(), "Today logged");
        self.commit(log).await;
        outcome
    }

    /// Publishes a mutated log and writes it back.
    ///
    /// The blob is taken and the save slot queued while the write lock is
    /// held, so saves land in mutation order. The lock is released before
    /// the store is awaited; readers never wait on storage.
    async fn commit(&self, log: RwLockWriteGuard<'_, CycleLog>) {
        let blob = log.to_json();
        let _save_slot = self.save_lock.lock().await;
        self.revision.send_modify(|rev| *rev += 1);
        drop(log);

        if let Err(e) = self.persist(blob).await {
            warn!(error = %e, "Failed to persist period log");
        }
    }

    /// Writes a serialized log to the store.
    ///
    /// Failures are reported to the caller only for logging; the in-memory
    /// log stays authoritative and the next successful write carries the
    /// full state.
    async fn persist(&self, blob: Result<String, serde_json::Error>) -> Result<(), StoreError> {
        let blob = blob.map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        self.store.save(PERIOD_ENTRIES_KEY, &blob).await
    }
}
