mod commands;
mod picker;
mod render;
mod utils;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rangepick_core::config::PickerConfig;
use rangepick_core::{CalendarDate, DisplayedMonth, GridLayout, GridOptions, WeekStart};
use tracing_subscriber::EnvFilter;

use crate::commands::show::Action;

#[derive(Parser)]
#[command(name = "rangepick")]
#[command(about = "Pick a date range from a month calendar in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Grid settings that override the config file.
#[derive(Args, Clone, Default)]
struct GridArgs {
    /// First day of the week (sunday or monday)
    #[arg(long)]
    week_start: Option<WeekStart>,

    /// Grid sizing (fixed: always five weeks, variable: as many as needed)
    #[arg(long)]
    layout: Option<GridLayout>,
}

impl GridArgs {
    fn resolve(&self, config: &PickerConfig) -> GridOptions {
        let mut options = config.grid_options();
        if let Some(week_start) = self.week_start {
            options.week_start = week_start;
        }
        if let Some(layout) = self.layout {
            options.layout = layout;
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month grid, optionally after replaying clicks
    Show {
        /// Month to display (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<DisplayedMonth>,

        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<CalendarDate>,

        /// Start of an initial selection (YYYY-MM-DD)
        #[arg(long)]
        start: Option<CalendarDate>,

        /// End of an initial selection (YYYY-MM-DD), requires --start
        #[arg(long)]
        end: Option<CalendarDate>,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        grid: GridArgs,

        /// Day numbers to click, and "prev"/"next" to change month, in order
        actions: Vec<Action>,
    },
    /// Choose a range interactively with the mouse
    Pick {
        /// Month to open on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<DisplayedMonth>,

        #[command(flatten)]
        grid: GridArgs,
    },
    /// Show configuration paths and settings
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            month,
            today,
            start,
            end,
            json,
            grid,
            actions,
        } => {
            let config = PickerConfig::load()?;
            let options = grid.resolve(&config);
            commands::show::run(
                commands::show::ShowRequest {
                    month,
                    today,
                    start,
                    end,
                    json,
                    options,
                    actions,
                },
                &config,
            )
        }
        Commands::Pick { month, grid } => {
            let config = PickerConfig::load()?;
            let options = grid.resolve(&config);
            commands::pick::run(month, options, &config)
        }
        Commands::Config => commands::config::run(),
    }
}
