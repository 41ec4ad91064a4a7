//! Recent-cycle history list.

use serde::{Deserialize, Serialize};

use super::interval::PeriodInterval;
use super::log::CycleLog;

/// How many past cycles the shells list.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// One row of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based position of the cycle in start order.
    pub cycle_number: usize,
    pub interval: PeriodInterval,
}

impl CycleLog {
    /// Up to `limit` most recent cycles, newest first.
    pub fn history(&self, limit: usize) -> Vec<HistoryEntry> {
        self.intervals()
            .iter()
            .enumerate()
            .rev()
            .take(limit)
            .map(|(idx, interval)| HistoryEntry {
                cycle_number: idx + 1,
                interval: *interval,
            })
            .collect()
    }
}
