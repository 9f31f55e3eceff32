//! The picker's state and the operations the presentation layer drives.

use tracing::debug;

use crate::date::CalendarDate;
use crate::grid::{self, Grid, GridOptions};
use crate::locale::{self, MonthNames};
use crate::month::{self, DisplayedMonth};
use crate::selection::Selection;

/// Displayed month plus the current selection.
///
/// The presentation layer calls [`build_grid`](Self::build_grid) and
/// [`displayed_month_label`](Self::displayed_month_label) to draw, and
/// forwards header navigation and cell clicks to
/// [`advance_month`](Self::advance_month) and
/// [`handle_day_click`](Self::handle_day_click). It is expected to redraw
/// after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRangeModel {
    displayed: DisplayedMonth,
    selection: Selection,
    options: GridOptions,
}

impl CalendarRangeModel {
    /// Start on the month containing `today` with an empty selection.
    pub fn new(today: CalendarDate) -> Self {
        Self::with_options(today, GridOptions::default())
    }

    pub fn with_options(today: CalendarDate, options: GridOptions) -> Self {
        Self::starting_at(DisplayedMonth::containing(today), options)
    }

    pub fn starting_at(month: DisplayedMonth, options: GridOptions) -> Self {
        CalendarRangeModel {
            displayed: month,
            selection: Selection::Empty,
            options,
        }
    }

    /// Replace the selection wholesale.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn displayed_month(&self) -> DisplayedMonth {
        self.displayed
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn options(&self) -> GridOptions {
        self.options
    }

    pub fn days_in_month(&self) -> u32 {
        month::days_in_month(self.displayed.year(), self.displayed.month())
    }

    pub fn first_weekday(&self) -> u32 {
        month::first_weekday_of_month(
            self.displayed.year(),
            self.displayed.month(),
            self.options.week_start,
        )
    }

    pub fn leading_filler_days(&self) -> Vec<u32> {
        grid::leading_filler_days(self.displayed, self.options.week_start)
    }

    pub fn trailing_filler_days(&self) -> Vec<u32> {
        grid::trailing_filler_days(self.first_weekday(), self.days_in_month(), self.options.layout)
    }

    /// Cells for the displayed month, classified against `today`.
    pub fn build_grid(&self, today: CalendarDate) -> Grid {
        grid::build_grid(self.displayed, &self.selection, today, self.options)
    }

    /// Move the displayed month; the selection is kept.
    pub fn advance_month(&mut self, delta: i32) {
        let from = self.displayed;
        self.displayed = self.displayed.advance(delta);
        debug!(from = %from, to = %self.displayed, delta, "advanced displayed month");
    }

    /// Apply a click on a grid cell. Returns whether the selection changed.
    ///
    /// Clicks on filler days, and day numbers the displayed month doesn't
    /// have, are ignored.
    pub fn handle_day_click(&mut self, day: u32, belongs_to_displayed_month: bool) -> bool {
        if !belongs_to_displayed_month {
            return false;
        }
        let Some(clicked) = self.displayed.date(day) else {
            return false;
        };

        let previous = self.selection;
        self.selection = previous.click(clicked);
        debug!(
            clicked = %clicked,
            before = ?previous,
            after = ?self.selection,
            "applied day click"
        );

        self.selection != previous
    }

    /// "Year MonthName" for the header.
    pub fn displayed_month_label(&self, names: &dyn MonthNames) -> String {
        locale::month_label(self.displayed, names)
    }
}
