//! Two-click range selection.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{PickerError, PickerResult};

/// The selected range. An end date without a start can't be expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Empty,
    Start {
        start: CalendarDate,
    },
    Range {
        start: CalendarDate,
        end: CalendarDate,
    },
}

impl Selection {
    /// Build a selection from optional bounds.
    pub fn from_bounds(
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    ) -> PickerResult<Self> {
        match (start, end) {
            (None, None) => Ok(Selection::Empty),
            (Some(start), None) => Ok(Selection::Start { start }),
            (Some(start), Some(end)) if start <= end => Ok(Selection::Range { start, end }),
            (Some(start), Some(end)) => Err(PickerError::InvalidSelection(format!(
                "end {} is before start {}",
                end, start
            ))),
            (None, Some(end)) => Err(PickerError::InvalidSelection(format!(
                "end {} given without a start",
                end
            ))),
        }
    }

    /// Apply a click on `clicked`:
    /// - nothing selected, or a date before the start: restart from `clicked`
    /// - a date after the start: it becomes the end, replacing any previous end
    /// - the start itself: clear everything
    pub fn click(self, clicked: CalendarDate) -> Selection {
        match self.start() {
            None => Selection::Start { start: clicked },
            Some(start) if clicked < start => Selection::Start { start: clicked },
            Some(start) if clicked > start => Selection::Range {
                start,
                end: clicked,
            },
            Some(_) => Selection::Empty,
        }
    }

    pub fn start(&self) -> Option<CalendarDate> {
        match self {
            Selection::Empty => None,
            Selection::Start { start } | Selection::Range { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<CalendarDate> {
        match self {
            Selection::Range { end, .. } => Some(*end),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// Whether `date` is the start or the end.
    pub fn is_endpoint(&self, date: &CalendarDate) -> bool {
        self.start().as_ref() == Some(date) || self.end().as_ref() == Some(date)
    }

    /// Whether `date` lies within a complete range, endpoints included.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        match self {
            Selection::Range { start, end } => start <= date && date <= end,
            _ => false,
        }
    }

    /// Inclusive length of a complete range in days.
    pub fn len_days(&self) -> Option<i64> {
        match self {
            Selection::Range { start, end } => Some(start.days_through(end)),
            _ => None,
        }
    }
}
