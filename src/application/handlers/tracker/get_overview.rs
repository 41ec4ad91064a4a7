//! GetTrackerOverviewHandler - Query handler for the tracker screen.
//!
//! Bundles everything one render needs: status card, prediction, the
//! requested calendar month and the recent-cycle list.

use std::sync::Arc;

use serde::Serialize;

use super::session::TrackerSession;
use crate::domain::cycle::{
    CycleEngine, CycleStatus, HistoryEntry, MonthView, NextPeriodPrediction, DEFAULT_HISTORY_LIMIT,
};
use crate::domain::foundation::{CalendarDate, DomainError, ErrorCode, YearMonth};

/// Query for one tracker screen render.
#[derive(Debug, Clone, Copy)]
pub struct GetTrackerOverviewQuery {
    pub year_month: YearMonth,
    pub today: CalendarDate,
    pub history_limit: usize,
}

impl GetTrackerOverviewQuery {
    /// Overview of the month containing `today`.
    pub fn for_today(today: CalendarDate) -> Self {
        Self {
            year_month: YearMonth::of(&today),
            today,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Everything the tracker screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerOverview {
    pub status: CycleStatus,
    pub prediction: Option<NextPeriodPrediction>,
    pub cycle_day: Option<u32>,
    pub in_period: bool,
    pub month: MonthView,
    pub history: Vec<HistoryEntry>,
}

/// Handler for tracker overview queries.
pub struct GetTrackerOverviewHandler {
    session: Arc<TrackerSession>,
}

impl GetTrackerOverviewHandler {
    pub fn new(session: Arc<TrackerSession>) -> Self {
        Self { session }
    }

    pub async fn handle(
        &self,
        query: GetTrackerOverviewQuery,
    ) -> Result<TrackerOverview, DomainError> {
        let log = self.session.snapshot().await;
        let engine = CycleEngine::new(&log, self.session.settings());
        let today = &query.today;

        let month = engine
            .classify_month(query.year_month, today)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::OutOfRange,
                    format!("{} is outside the supported calendar", query.year_month),
                )
            })?;

        Ok(TrackerOverview {
            status: engine.status(today),
            prediction: engine.next_period_prediction(today),
            cycle_day: engine.current_cycle_day(today),
            in_period: engine.is_in_current_period(today),
            month,
            history: log.history(query.history_limit),
        })
    }
}
