//! Month display names.

use chrono::Month;

use crate::error::{PickerError, PickerResult};
use crate::month::DisplayedMonth;

/// Maps a zero-based month index (0 = January) to a display name.
pub trait MonthNames {
    fn month_name(&self, index: u32) -> &str;
}

/// English month names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMonthNames;

impl MonthNames for EnglishMonthNames {
    fn month_name(&self, index: u32) -> &str {
        index
            .checked_add(1)
            .and_then(|n| u8::try_from(n).ok())
            .and_then(|n| Month::try_from(n).ok())
            .map(|m| m.name())
            .unwrap_or("")
    }
}

/// Twelve names supplied by configuration.
#[derive(Debug, Clone)]
pub struct CustomMonthNames {
    names: Vec<String>,
}

impl CustomMonthNames {
    pub fn new(names: Vec<String>) -> PickerResult<Self> {
        if names.len() != 12 {
            return Err(PickerError::Config(format!(
                "month_names must list 12 names, got {}",
                names.len()
            )));
        }
        Ok(CustomMonthNames { names })
    }
}

impl MonthNames for CustomMonthNames {
    fn month_name(&self, index: u32) -> &str {
        self.names.get(index as usize).map(String::as_str).unwrap_or("")
    }
}

/// "Year MonthName", e.g. "2024 February".
pub fn month_label(month: DisplayedMonth, names: &dyn MonthNames) -> String {
    format!("{} {}", month.year(), names.month_name(month.index0()))
}
