//! Core of the rangepick date-range picker.
//!
//! This crate holds everything that isn't drawing:
//! - calendar arithmetic for the month grid (`month`, `grid`)
//! - the two-click range selection (`selection`)
//! - `CalendarRangeModel`, the state a presentation layer renders and feeds
//!   clicks back into
//! - configuration, month names and the clock

pub mod clock;
pub mod config;
pub mod date;
pub mod error;
pub mod grid;
pub mod locale;
pub mod model;
pub mod month;
pub mod selection;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::CalendarDate;
pub use error::{PickerError, PickerResult};
pub use grid::{DayCell, Grid, GridLayout, GridOptions};
pub use model::CalendarRangeModel;
pub use month::{DisplayedMonth, WeekStart};
pub use selection::Selection;
