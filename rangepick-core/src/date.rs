//! Calendar dates without a time of day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

/// A (year, month, day) value compared only by calendar identity.
///
/// Serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date, rejecting days that don't exist (e.g. 2023-02-29).
    pub fn new(year: i32, month: u32, day: u32) -> PickerResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| {
                PickerError::InvalidDate(format!("{:04}-{:02}-{:02} does not exist", year, month, day))
            })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
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

    /// Inclusive number of days from `self` to `other` (1 when equal).
    pub fn days_through(&self, other: &CalendarDate) -> i64 {
        (other.0 - self.0).num_days().abs() + 1
    }
}

impl FromStr for CalendarDate {
    type Err = PickerError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(CalendarDate)
            .map_err(|_| PickerError::InvalidDate(format!("'{}'. Expected YYYY-MM-DD", s)))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_nonexistent_day() {
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2024, 13, 1).is_err());
    }

    #[test]
    fn test_ordering_is_calendar_order() {
        let a = CalendarDate::new(2024, 1, 31).unwrap();
        let b = CalendarDate::new(2024, 2, 1).unwrap();
        assert!(a < b);
        assert_eq!(a, CalendarDate::new(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_parse_and_display() {
        let date: CalendarDate = "2024-02-05".parse().unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 5);
        assert_eq!(date.to_string(), "2024-02-05");
        assert!("2024/02/05".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_serializes_as_iso_string() {
        let date = CalendarDate::new(2024, 3, 9).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-03-09\"");
    }

    #[test]
    fn test_days_through_is_inclusive() {
        let start = CalendarDate::new(2024, 2, 5).unwrap();
        let end = CalendarDate::new(2024, 2, 10).unwrap();
        assert_eq!(start.days_through(&end), 6);
        assert_eq!(start.days_through(&start), 1);
    }
}
