//! Month classification for calendar rendering.
//!
//! The calendar view is a pure consumer: it asks for a [`MonthView`] and
//! draws it. Months are independent, so navigating back and forth never
//! touches the log.

use serde::{Deserialize, Serialize};

use super::engine::CycleEngine;
use crate::domain::foundation::{CalendarDate, YearMonth};

/// Classification of a single day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub day: u32,
    pub is_today: bool,
    pub is_period_day: bool,
    pub is_period_start: bool,
    pub is_period_end: bool,
}

/// A grid slot: blank padding before day 1, or a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell<'a> {
    Blank,
    Day(&'a DayCell),
}

/// Every day of one month, with the padding needed to align day 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year_month: YearMonth,
    /// Weekday index of day 1 (Sunday = 0).
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthView {
    /// Cells in display order: leading blanks, then days 1..=n.
    pub fn grid(&self) -> Vec<GridCell<'_>> {
        let blanks = (0..self.leading_blanks).map(|_| GridCell::Blank);
        blanks.chain(self.days.iter().map(GridCell::Day)).collect()
    }

    /// The grid split into rows of seven.
    pub fn weeks(&self) -> Vec<Vec<GridCell<'_>>> {
        self.grid().chunks(7).map(|week| week.to_vec()).collect()
    }

    pub fn period_day_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_period_day).count()
    }
}

impl<'a> CycleEngine<'a> {
    /// Classifies every day of `year_month` against the log.
    ///
    /// Returns `None` when the month lies outside the supported calendar
    /// range.
    pub fn classify_month(
        &self,
        year_month: YearMonth,
        today: &CalendarDate,
    ) -> Option<MonthView> {
        let first = year_month.first_day()?;
        let days = (1..=year_month.days_in_month())
            .filter_map(|day| year_month.day(day))
            .map(|date| DayCell {
                date,
                day: date.day(),
                is_today: date == *today,
                is_period_day: self.is_period_day(&date),
                is_period_start: self.is_period_start(&date),
                is_period_end: self.is_period_end(&date),
            })
            .collect();

        Some(MonthView {
            year_month,
            leading_blanks: first.weekday_from_sunday(),
            days,
        })
    }
}
