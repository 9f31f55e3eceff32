//! Terminal rendering of the month grid.
//!
//! Extension traits add colored output to rangepick-core types using
//! owo_colors. Every function takes a `color` switch so the layout can be
//! checked without escape codes.

use owo_colors::{OwoColorize, Style};
use rangepick_core::grid::{DAYS_PER_WEEK, DayCell, Grid};
use rangepick_core::{Selection, WeekStart};

/// Width of one day column, including the separating space.
const CELL_WIDTH: usize = 3;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, color: bool) -> String;
}

impl Render for DayCell {
    fn render(&self, color: bool) -> String {
        let text = format!("{:>2}", self.day);
        if !color {
            return text;
        }
        text.style(cell_style(self)).to_string()
    }
}

fn cell_style(cell: &DayCell) -> Style {
    if !cell.belongs_to_displayed_month {
        return Style::new().dimmed();
    }

    let mut style = Style::new();
    if cell.is_in_range {
        style = style.on_blue();
    }
    if cell.is_range_endpoint {
        style = style.black().on_cyan().bold();
    }
    if cell.is_today {
        style = style.yellow().underline();
    }
    style
}

/// Two-letter weekday names in column order.
pub fn weekday_header_labels(week_start: WeekStart) -> Vec<String> {
    week_start
        .weekdays()
        .iter()
        .map(|d| d.to_string()[..2].to_string())
        .collect()
}

pub fn weekday_header(week_start: WeekStart) -> String {
    weekday_header_labels(week_start).join(" ")
}

/// Header with navigation arrows, weekday row and one line per week.
pub fn render_month(grid: &Grid, label: &str, color: bool) -> String {
    let width = DAYS_PER_WEEK * CELL_WIDTH - 1;
    let inner = width - 4;

    let mut lines = Vec::new();
    let title = format!("{:^inner$}", label, inner = inner);
    if color {
        lines.push(format!("{} {} {}", "<".dimmed(), title.bold(), ">".dimmed()));
    } else {
        lines.push(format!("< {} >", title));
    }

    let header = weekday_header(grid.options.week_start);
    lines.push(if color { header.yellow().to_string() } else { header });

    for week in grid.weeks() {
        let row: Vec<String> = week.iter().map(|c| c.render(color)).collect();
        lines.push(row.join(" "));
    }

    lines.join("\n")
}

/// One-line summary of the selection.
pub fn render_selection(selection: &Selection) -> String {
    match selection {
        Selection::Empty => "No dates selected".dimmed().to_string(),
        Selection::Start { start } => {
            format!("{} {} {}", "Start:".bold(), start, "(pick an end date)".dimmed())
        }
        Selection::Range { start, end } => {
            let days = selection.len_days().unwrap_or(0);
            let label = format!("({} {})", days, if days == 1 { "day" } else { "days" });
            format!("{} {} → {} {}", "Range:".bold(), start, end, label.dimmed())
        }
    }
}

/// Plain `START..END` (or `START`) for scripts.
pub fn selection_output(selection: &Selection) -> Option<String> {
    match selection {
        Selection::Empty => None,
        Selection::Start { start } => Some(start.to_string()),
        Selection::Range { start, end } => Some(format!("{}..{}", start, end)),
    }
}
