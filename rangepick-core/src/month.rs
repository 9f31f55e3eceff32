//! Displayed month and the calendar arithmetic behind the grid.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{PickerError, PickerResult};

/// First column of the week grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index (0-6) of `weekday` in a week starting on `self`.
    pub fn index_of(&self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// The seven weekdays in column order.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let first = match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        };
        let mut days = [first; 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }
}

impl FromStr for WeekStart {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(PickerError::Config(format!(
                "Unknown week start '{}'. Expected 'sunday' or 'monday'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for WeekStart {
    type Error = PickerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

/// The (year, month) pair shown in the grid. Month is 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthParts")]
pub struct DisplayedMonth {
    year: i32,
    month: u32,
}

impl DisplayedMonth {
    pub fn new(year: i32, month: u32) -> PickerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PickerError::InvalidMonth(format!(
                "month {} is outside 1-12",
                month
            )));
        }
        if !(min_year()..=max_year()).contains(&year) {
            return Err(PickerError::InvalidMonth(format!(
                "year {} is outside the supported range",
                year
            )));
        }
        Ok(DisplayedMonth { year, month })
    }

    /// The month a date falls in.
    pub fn containing(date: CalendarDate) -> Self {
        DisplayedMonth {
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

    /// Zero-based month index (0 = January), as used by month-name lookup.
    pub fn index0(&self) -> u32 {
        self.month - 1
    }

    /// Move by `delta` months, rolling the year over in either direction.
    /// Saturates at the edges of the supported calendar.
    pub fn advance(&self, delta: i32) -> Self {
        let ordinal = self.ordinal() + i64::from(delta);
        let ordinal = ordinal.clamp(
            i64::from(min_year()) * 12,
            i64::from(max_year()) * 12 + 11,
        );
        Self::from_ordinal(ordinal)
    }

    pub fn previous(&self) -> Self {
        self.advance(-1)
    }

    pub fn next(&self) -> Self {
        self.advance(1)
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The date of `day` in this month, if the day exists.
    pub fn date(&self, day: u32) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month, day).ok()
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month - 1)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        DisplayedMonth {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }
}

#[derive(Deserialize)]
struct MonthParts {
    year: i32,
    month: u32,
}

impl TryFrom<MonthParts> for DisplayedMonth {
    type Error = PickerError;

    fn try_from(parts: MonthParts) -> Result<Self, Self::Error> {
        DisplayedMonth::new(parts.year, parts.month)
    }
}

impl FromStr for DisplayedMonth {
    type Err = PickerError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PickerError::InvalidMonth(format!("'{}'. Expected YYYY-MM", s));

        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        DisplayedMonth::new(year, month)
    }
}

impl fmt::Display for DisplayedMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn min_year() -> i32 {
    NaiveDate::MIN.year()
}

fn max_year() -> i32 {
    NaiveDate::MAX.year()
}

/// Normalize a possibly out-of-range month (e.g. 13, 0) the way calendar
/// arithmetic does: 13 is January of the next year, 0 is December of the
/// previous one.
fn normalize(year: i32, month: u32) -> (i32, u32) {
    let ordinal = i64::from(year) * 12 + i64::from(month) - 1;
    let normalized = DisplayedMonth::from_ordinal(ordinal);
    (normalized.year, normalized.month)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, computed as the day before the 1st of the
/// following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (year, month) = normalize(year, month);
    let (next_year, next_month) = normalize(year, month + 1);

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or_else(|| match month {
            // Past the last representable month; fall back to the table.
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(year) => 29,
            2 => 28,
            _ => 31,
        })
}

/// Column index (0-6) of the 1st of the month, 0 being the first day of the
/// week.
pub fn first_weekday_of_month(year: i32, month: u32, week_start: WeekStart) -> u32 {
    let (year, month) = normalize(year, month);

    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| week_start.index_of(d.weekday()))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> DisplayedMonth {
        DisplayedMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_days_in_month_for_every_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2023, i as u32 + 1), *days, "month {}", i + 1);
        }
    }

    #[test]
    fn test_days_in_month_normalizes_overflowing_month() {
        assert_eq!(days_in_month(2023, 14), 29);
        assert_eq!(days_in_month(2024, 0), 31);
    }

    #[test]
    fn test_first_weekday_of_month() {
        // 2024-02-01 is a Thursday
        assert_eq!(first_weekday_of_month(2024, 2, WeekStart::Sunday), 4);
        assert_eq!(first_weekday_of_month(2024, 2, WeekStart::Monday), 3);
        // 2026-02-01 is a Sunday
        assert_eq!(first_weekday_of_month(2026, 2, WeekStart::Sunday), 0);
        assert_eq!(first_weekday_of_month(2026, 2, WeekStart::Monday), 6);
    }

    #[test]
    fn test_advance_rolls_year_backwards() {
        assert_eq!(month(2024, 1).advance(-1), month(2023, 12));
        assert_eq!(month(2024, 1).previous(), month(2023, 12));
    }

    #[test]
    fn test_advance_rolls_year_forwards() {
        assert_eq!(month(2023, 12).next(), month(2024, 1));
        assert_eq!(month(2024, 5).advance(20), month(2026, 1));
        assert_eq!(month(2024, 5).advance(-29), month(2021, 12));
        assert_eq!(month(2024, 5).advance(0), month(2024, 5));
    }

    #[test]
    fn test_advance_saturates_at_calendar_edges() {
        let last = month(NaiveDate::MAX.year(), 12);
        assert_eq!(last.next(), last);
        let first = month(NaiveDate::MIN.year(), 1);
        assert_eq!(first.previous(), first);
    }

    #[test]
    fn test_new_rejects_month_out_of_range() {
        assert!(DisplayedMonth::new(2024, 0).is_err());
        assert!(DisplayedMonth::new(2024, 13).is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!("2024-02".parse::<DisplayedMonth>().unwrap(), month(2024, 2));
        assert!("2024".parse::<DisplayedMonth>().is_err());
        assert!("2024-13".parse::<DisplayedMonth>().is_err());
        assert_eq!(month(2024, 2).to_string(), "2024-02");
    }

    #[test]
    fn test_week_start_weekdays_order() {
        assert_eq!(WeekStart::Sunday.weekdays()[0], Weekday::Sun);
        assert_eq!(WeekStart::Sunday.weekdays()[6], Weekday::Sat);
        assert_eq!(WeekStart::Monday.weekdays()[0], Weekday::Mon);
        assert_eq!(WeekStart::Monday.weekdays()[6], Weekday::Sun);
    }

    #[test]
    fn test_week_start_from_str() {
        assert_eq!("Monday".parse::<WeekStart>().unwrap(), WeekStart::Monday);
        assert_eq!("sun".parse::<WeekStart>().unwrap(), WeekStart::Sunday);
        assert!("friday".parse::<WeekStart>().is_err());
    }

    #[test]
    fn test_week_start_deserializes_like_from_str() {
        let parsed: WeekStart = serde_json::from_str("\"Sunday\"").unwrap();
        assert_eq!(parsed, WeekStart::Sunday);
        let parsed: WeekStart = serde_json::from_str("\"mon\"").unwrap();
        assert_eq!(parsed, WeekStart::Monday);
        assert!(serde_json::from_str::<WeekStart>("\"friday\"").is_err());
        assert_eq!(serde_json::to_string(&WeekStart::Monday).unwrap(), "\"monday\"");
    }

    #[test]
    fn test_deserialize_month_checks_range() {
        let parsed: DisplayedMonth = serde_json::from_str(r#"{"year":2024,"month":2}"#).unwrap();
        assert_eq!(parsed, month(2024, 2));
        assert!(serde_json::from_str::<DisplayedMonth>(r#"{"year":2024,"month":0}"#).is_err());
        assert!(serde_json::from_str::<DisplayedMonth>(r#"{"year":2024,"month":13}"#).is_err());
    }
}
