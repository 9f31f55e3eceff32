//! Month grid: filler days from adjacent months plus the classified days of
//! the displayed month.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::PickerError;
use crate::month::{DisplayedMonth, WeekStart, days_in_month, first_weekday_of_month};
use crate::selection::Selection;

pub const DAYS_PER_WEEK: usize = 7;

/// Cells in the fixed five-week layout.
pub const FIXED_GRID_CELLS: usize = 35;

/// How many cells the grid is sized for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum GridLayout {
    /// Always five weeks. Months that need a sixth week get no trailing
    /// filler and spill past 35 cells.
    #[default]
    Fixed,
    /// As many whole weeks as the month needs (four to six).
    Variable,
}

impl FromStr for GridLayout {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(GridLayout::Fixed),
            "variable" => Ok(GridLayout::Variable),
            other => Err(PickerError::Config(format!(
                "Unknown grid layout '{}'. Expected 'fixed' or 'variable'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for GridLayout {
    type Error = PickerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridLayout::Fixed => write!(f, "fixed"),
            GridLayout::Variable => write!(f, "variable"),
        }
    }
}

/// Layout settings that shape the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    pub week_start: WeekStart,
    pub layout: GridLayout,
}

/// Number of cells the layout is sized for.
pub fn grid_cell_count(first_weekday: u32, days_in_month: u32, layout: GridLayout) -> usize {
    match layout {
        GridLayout::Fixed => FIXED_GRID_CELLS,
        GridLayout::Variable => {
            let used = (first_weekday + days_in_month) as usize;
            used.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK
        }
    }
}

/// The last `first_weekday` day numbers of the month before `month`, in
/// ascending order.
pub fn leading_filler_days(month: DisplayedMonth, week_start: WeekStart) -> Vec<u32> {
    let first_weekday = first_weekday_of_month(month.year(), month.month(), week_start);
    if first_weekday == 0 {
        return Vec::new();
    }

    let previous = month.previous();
    let days_in_previous = days_in_month(previous.year(), previous.month());

    (days_in_previous - first_weekday + 1..=days_in_previous).collect()
}

/// Day numbers `1..=K` of the following month that pad the last row.
///
/// Empty when the month already fills or overflows the layout.
pub fn trailing_filler_days(first_weekday: u32, days_in_month: u32, layout: GridLayout) -> Vec<u32> {
    let total = grid_cell_count(first_weekday, days_in_month, layout);
    let used = (first_weekday + days_in_month) as usize;
    let remaining = total.saturating_sub(used) as u32;

    (1..=remaining).collect()
}

/// One rendered grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub belongs_to_displayed_month: bool,
    pub is_today: bool,
    pub is_range_endpoint: bool,
    pub is_in_range: bool,
    /// Set only for days of the displayed month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<CalendarDate>,
}

impl DayCell {
    /// A disabled day from an adjacent month.
    pub fn filler(day: u32) -> Self {
        DayCell {
            day,
            belongs_to_displayed_month: false,
            is_today: false,
            is_range_endpoint: false,
            is_in_range: false,
            date: None,
        }
    }

    /// A day of the displayed month, classified against the selection and
    /// today's date.
    pub fn classify(date: CalendarDate, selection: &Selection, today: CalendarDate) -> Self {
        DayCell {
            day: date.day(),
            belongs_to_displayed_month: true,
            is_today: date == today,
            is_range_endpoint: selection.is_endpoint(&date),
            is_in_range: selection.contains(&date),
            date: Some(date),
        }
    }

    /// Filler cells can't be clicked.
    pub fn is_enabled(&self) -> bool {
        self.belongs_to_displayed_month
    }
}

/// The cells for one displayed month, row-major, a week per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub month: DisplayedMonth,
    pub options: GridOptions,
    pub cells: Vec<DayCell>,
}

impl Grid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of seven cells. The final row may be short when a fixed grid
    /// overflows.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// A fixed grid carrying more than five weeks of cells.
    pub fn overflows(&self) -> bool {
        self.options.layout == GridLayout::Fixed && self.cells.len() > FIXED_GRID_CELLS
    }

    /// Cells that accept clicks.
    pub fn selectable_days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| c.is_enabled())
    }

    pub fn cell(&self, index: usize) -> Option<&DayCell> {
        self.cells.get(index)
    }
}

/// Lay out `month`: previous-month filler, the month's own days, then
/// next-month filler.
pub fn build_grid(
    month: DisplayedMonth,
    selection: &Selection,
    today: CalendarDate,
    options: GridOptions,
) -> Grid {
    let first_weekday = first_weekday_of_month(month.year(), month.month(), options.week_start);
    let days = days_in_month(month.year(), month.month());

    let mut cells: Vec<DayCell> = leading_filler_days(month, options.week_start)
        .into_iter()
        .map(DayCell::filler)
        .collect();

    cells.extend(
        (1..=days)
            .filter_map(|day| month.date(day))
            .map(|date| DayCell::classify(date, selection, today)),
    );

    cells.extend(
        trailing_filler_days(first_weekday, days, options.layout)
            .into_iter()
            .map(DayCell::filler),
    );

    let grid = Grid {
        month,
        options,
        cells,
    };

    if grid.overflows() {
        debug!(
            month = %month,
            cells = grid.len(),
            "month needs six weeks; fixed grid overflows"
        );
    }

    grid
}
