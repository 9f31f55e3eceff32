use std::str::FromStr;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rangepick_core::config::PickerConfig;
use rangepick_core::grid::Grid;
use rangepick_core::locale::MonthNames;
use rangepick_core::{
    CalendarDate, CalendarRangeModel, Clock, DisplayedMonth, FixedClock, GridOptions, Selection,
    SystemClock,
};
use serde::Serialize;

use crate::render::{render_month, render_selection};

/// One replayed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Click(u32),
    Advance(i32),
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" | ">" => Ok(Action::Advance(1)),
            "prev" | "<" => Ok(Action::Advance(-1)),
            day => day
                .parse::<u32>()
                .map(Action::Click)
                .map_err(|_| format!("'{}' is not a day number, 'prev' or 'next'", s)),
        }
    }
}

pub struct ShowRequest {
    pub month: Option<DisplayedMonth>,
    pub today: Option<CalendarDate>,
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
    pub json: bool,
    pub options: GridOptions,
    pub actions: Vec<Action>,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    label: String,
    selection: &'a Selection,
    grid: &'a Grid,
}

pub fn run(request: ShowRequest, config: &PickerConfig) -> Result<()> {
    let clock: Box<dyn Clock> = match request.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    };
    let names = config.month_names()?;

    let model = replay(&request, clock.as_ref())?;
    let today = clock.today();
    let grid = model.build_grid(today);

    if request.json {
        let output = ShowOutput {
            label: model.displayed_month_label(names.as_ref()),
            selection: model.selection(),
            grid: &grid,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize grid")?
        );
        return Ok(());
    }

    print_grid(&model, &grid, names.as_ref());
    Ok(())
}

/// Build the model and feed it the requested clicks and month changes.
fn replay(request: &ShowRequest, clock: &dyn Clock) -> Result<CalendarRangeModel> {
    let selection = Selection::from_bounds(request.start, request.end)?;
    let month = request
        .month
        .unwrap_or_else(|| DisplayedMonth::containing(clock.today()));

    let mut model = CalendarRangeModel::starting_at(month, request.options).with_selection(selection);

    for action in &request.actions {
        match *action {
            Action::Advance(delta) => model.advance_month(delta),
            Action::Click(day) => {
                let displayed = model.displayed_month();
                if displayed.date(day).is_none() {
                    anyhow::bail!(
                        "Day {} does not exist in {} ({} days)",
                        day,
                        displayed,
                        displayed.days()
                    );
                }
                model.handle_day_click(day, true);
            }
        }
    }

    Ok(model)
}

fn print_grid(model: &CalendarRangeModel, grid: &Grid, names: &dyn MonthNames) {
    let label = model.displayed_month_label(names);
    println!("{}", render_month(grid, &label, true));

    if grid.overflows() {
        println!(
            "{}",
            format!("{} needs six weeks; use --layout variable to show them all", label).dimmed()
        );
    }

    println!();
    println!("{}", render_selection(model.selection()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(actions: Vec<Action>) -> ShowRequest {
        ShowRequest {
            month: Some(DisplayedMonth::new(2024, 2).unwrap()),
            today: None,
            start: None,
            end: None,
            json: false,
            options: GridOptions::default(),
            actions,
        }
    }

    fn clock() -> FixedClock {
        FixedClock(CalendarDate::new(2024, 2, 14).unwrap())
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("12".parse::<Action>().unwrap(), Action::Click(12));
        assert_eq!("next".parse::<Action>().unwrap(), Action::Advance(1));
        assert_eq!("<".parse::<Action>().unwrap(), Action::Advance(-1));
        assert!("tomorrow".parse::<Action>().is_err());
    }

    #[test]
    fn test_replay_clicks_across_months() {
        let actions = vec![Action::Click(20), Action::Advance(1), Action::Click(3)];
        let model = replay(&request(actions), &clock()).unwrap();

        assert_eq!(
            *model.selection(),
            Selection::Range {
                start: CalendarDate::new(2024, 2, 20).unwrap(),
                end: CalendarDate::new(2024, 3, 3).unwrap(),
            }
        );
        assert_eq!(model.displayed_month(), DisplayedMonth::new(2024, 3).unwrap());
    }

    #[test]
    fn test_replay_rejects_day_outside_month() {
        let result = replay(&request(vec![Action::Click(30)]), &clock());
        assert!(result.is_err());
    }

    #[test]
    fn test_replay_defaults_to_clock_month() {
        let mut req = request(vec![]);
        req.month = None;
        let model = replay(&req, &clock()).unwrap();
        assert_eq!(model.displayed_month(), DisplayedMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn test_replay_seeds_selection() {
        let mut req = request(vec![Action::Click(12)]);
        req.start = Some(CalendarDate::new(2024, 2, 10).unwrap());
        let model = replay(&req, &clock()).unwrap();
        assert_eq!(model.selection().end(), Some(CalendarDate::new(2024, 2, 12).unwrap()));
    }
}
