use anyhow::Result;
use rangepick_core::config::PickerConfig;
use rangepick_core::{CalendarRangeModel, Clock, DisplayedMonth, GridOptions, SystemClock};

use crate::picker::{Outcome, PickerApp};
use crate::render::selection_output;
use crate::utils::tui;

pub fn run(month: Option<DisplayedMonth>, options: GridOptions, config: &PickerConfig) -> Result<()> {
    let clock = SystemClock;
    let model = match month {
        Some(month) => CalendarRangeModel::starting_at(month, options),
        None => CalendarRangeModel::with_options(clock.today(), options),
    };
    let app = PickerApp::new(model, Box::new(clock), config.month_names()?);

    tui::install_panic_hook();
    let mut terminal = tui::setup_terminal()?;
    let result = app.run(&mut terminal);
    tui::restore_terminal(&mut terminal)?;

    match result? {
        Outcome::Accepted(selection) => {
            if let Some(output) = selection_output(&selection) {
                println!("{}", output);
            }
        }
        Outcome::Cancelled => {}
    }

    Ok(())
}
