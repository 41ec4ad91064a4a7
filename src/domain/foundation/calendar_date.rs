//! CalendarDate value object for day-granularity dates.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::year_month::month_name;

/// ISO calendar date format used for storage and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date without time of day.
///
/// Serializes as `"YYYY-MM-DD"`, which also makes the string form sort in
/// the same order as the date itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month (1-12) and day.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the combination is not a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Parses an ISO `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("date", e.to_string()))
    }

    /// Today's date in the local time zone.
    ///
    /// Only clocks call this; domain logic always receives `today` explicitly.
    pub fn today_local() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Creates a new date by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Signed number of days from `self` to `other`.
    ///
    /// Positive when `other` is later.
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Weekday index with Sunday = 0.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Day and full Indonesian month name, e.g. `4 Januari`.
    pub fn day_month_label(&self) -> String {
        format!("{} {}", self.day(), month_name(self.month()))
    }

    /// Day, full Indonesian month name and year, e.g. `29 Januari 2024`.
    pub fn long_label(&self) -> String {
        format!("{} {}", self.day_month_label(), self.year())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        let d = date("2024-01-15");
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 15);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(CalendarDate::parse("2024-13-01").is_err());
        assert!(CalendarDate::parse("15/01/2024").is_err());
        assert!(CalendarDate::parse("").is_err());
    }

    #[test]
    fn from_ymd_rejects_impossible_day() {
        assert!(CalendarDate::from_ymd(2023, 2, 29).is_err());
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        assert_eq!(date("2024-01-01").add_days(28), date("2024-01-29"));
        assert_eq!(date("2023-12-29").add_days(6), date("2024-01-04"));
        assert_eq!(date("2024-03-01").add_days(-1), date("2024-02-29"));
    }

    #[test]
    fn days_until_is_signed() {
        let a = date("2024-01-26");
        let b = date("2024-01-29");
        assert_eq!(a.days_until(&b), 3);
        assert_eq!(b.days_until(&a), -3);
        assert_eq!(a.days_until(&a), 0);
    }

    #[test]
    fn weekday_starts_on_sunday() {
        // 2024-02-04 was a Sunday, 2024-02-01 a Thursday
        assert_eq!(date("2024-02-04").weekday_from_sunday(), 0);
        assert_eq!(date("2024-02-01").weekday_from_sunday(), 4);
    }

    #[test]
    fn labels_use_indonesian_month_names() {
        assert_eq!(date("2024-01-04").day_month_label(), "4 Januari");
        assert_eq!(date("2024-08-17").long_label(), "17 Agustus 2024");
    }

    #[test]
    fn serializes_as_iso_string() {
        let json = serde_json::to_string(&date("2024-01-07")).unwrap();
        assert_eq!(json, "\"2024-01-07\"");

        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date("2024-01-07"));
    }

    #[test]
    fn deserialize_rejects_garbage() {
        let result: Result<CalendarDate, _> = serde_json::from_str("\"yesterday\"");
        assert!(result.is_err());
    }

    #[test]
    fn ordering_follows_dates() {
        assert!(date("2024-01-31") < date("2024-02-01"));
    }
}
