//! Error types for rangepick.

use thiserror::Error;

/// Errors that can occur at the edges of the picker model.
///
/// The model operations themselves never fail; these cover parsing user
/// input, seeding a selection and loading configuration.
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rangepick operations.
pub type PickerResult<T> = Result<T, PickerError>;
