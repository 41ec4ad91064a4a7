//! YearMonth value object for calendar navigation.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar_date::CalendarDate;
use super::errors::ValidationError;

/// Indonesian month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Short Indonesian weekday names, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

/// Returns the Indonesian name for a 1-based month number.
///
/// Out-of-range numbers wrap like month navigation does.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.saturating_sub(1) % 12) as usize]
}

/// A month of a specific year.
///
/// Always normalized: `month` is 1-12. Deserialized values are checked
/// and rejected otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearMonthRecord")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Unchecked wire form of [`YearMonth`].
#[derive(Deserialize)]
struct YearMonthRecord {
    year: i32,
    month: u32,
}

impl TryFrom<YearMonthRecord> for YearMonth {
    type Error = ValidationError;

    fn try_from(record: YearMonthRecord) -> Result<Self, Self::Error> {
        if !(1..=12).contains(&record.month) {
            return Err(ValidationError::out_of_range(
                "month",
                1,
                12,
                record.month as i64,
            ));
        }
        let year_month = Self {
            year: record.year,
            month: record.month,
        };
        if year_month.first_day().is_none() {
            return Err(ValidationError::out_of_range(
                "year",
                NaiveDate::MIN.year() as i64,
                NaiveDate::MAX.year() as i64,
                record.year as i64,
            ));
        }
        Ok(year_month)
    }
}

impl YearMonth {
    /// Creates a month from a year and a 0-based month index.
    ///
    /// The index may be out of range and rolls over into neighbouring
    /// years: `(2024, -1)` is December 2023, `(2024, 12)` is January 2025.
    pub fn from_index(year: i32, month_index: i32) -> Self {
        let total = year as i64 * 12 + month_index as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    /// The month containing `date`.
    pub fn of(date: &CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves `months` forward (or backward when negative).
    pub fn offset(&self, months: i32) -> Self {
        Self::from_index(self.year, self.month as i32 - 1 + months)
    }

    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    /// First day of the month, or `None` when the year lies outside the
    /// supported calendar range.
    pub fn first_day(&self) -> Option<CalendarDate> {
        self.day(1)
    }

    /// Number of days in the month, leap years included.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// The date of `day` within this month, if it exists.
    pub fn day(&self, day: u32) -> Option<CalendarDate> {
        CalendarDate::from_ymd(self.year, self.month, day).ok()
    }

    /// Indonesian month name.
    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_normalizes_negative_months() {
        let ym = YearMonth::from_index(2024, -1);
        assert_eq!(ym.year(), 2023);
        assert_eq!(ym.month(), 12);

        let ym = YearMonth::from_index(2024, -13);
        assert_eq!(ym.year(), 2022);
        assert_eq!(ym.month(), 12);
    }

    #[test]
    fn from_index_normalizes_overflow() {
        let ym = YearMonth::from_index(2024, 12);
        assert_eq!((ym.year(), ym.month()), (2025, 1));
    }

    #[test]
    fn prev_and_next_roll_over_years() {
        let jan = YearMonth::from_index(2024, 0);
        assert_eq!(jan.prev(), YearMonth::from_index(2023, 11));
        assert_eq!(jan.prev().next(), jan);
        let dec = YearMonth::from_index(2024, 11);
        assert_eq!(dec.next(), YearMonth::from_index(2025, 0));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(YearMonth::from_index(2024, 1).days_in_month(), 29);
        assert_eq!(YearMonth::from_index(2023, 1).days_in_month(), 28);
        assert_eq!(YearMonth::from_index(2024, 0).days_in_month(), 31);
        assert_eq!(YearMonth::from_index(2024, 3).days_in_month(), 30);
        assert_eq!(YearMonth::from_index(1900, 1).days_in_month(), 28);
        assert_eq!(YearMonth::from_index(2000, 1).days_in_month(), 29);
    }

    #[test]
    fn days_in_month_agrees_with_calendar() {
        for month_index in 0..24 {
            let ym = YearMonth::from_index(2023, month_index);
            let first = ym.first_day().unwrap();
            let next = ym.next().first_day().unwrap();
            assert_eq!(first.days_until(&next), ym.days_in_month() as i64);
        }
    }

    #[test]
    fn first_day_is_none_outside_calendar_range() {
        assert_eq!(
            YearMonth::from_index(2024, 1).first_day(),
            Some(CalendarDate::parse("2024-02-01").unwrap())
        );
        let far = YearMonth::from_index(i32::MAX / 12, 0);
        assert!(far.first_day().is_none());
    }

    #[test]
    fn deserialize_accepts_normalized_month() {
        let ym: YearMonth = serde_json::from_str(r#"{"year":2024,"month":2}"#).unwrap();
        assert_eq!(ym, YearMonth::from_index(2024, 1));
    }

    #[test]
    fn deserialize_rejects_month_out_of_range() {
        for blob in [r#"{"year":2024,"month":13}"#, r#"{"year":2024,"month":0}"#] {
            assert!(serde_json::from_str::<YearMonth>(blob).is_err());
        }
    }

    #[test]
    fn deserialize_rejects_year_outside_calendar_range() {
        let err = serde_json::from_str::<YearMonth>(r#"{"year":2000000,"month":1}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("year"), "{err}");
    }

    #[test]
    fn display_uses_indonesian_name() {
        assert_eq!(YearMonth::from_index(2024, 1).to_string(), "Februari 2024");
    }

    #[test]
    fn of_date_matches_month() {
        let d = CalendarDate::parse("2024-08-17").unwrap();
        assert_eq!(YearMonth::of(&d), YearMonth::from_index(2024, 7));
    }
}
