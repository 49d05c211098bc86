//! Error types for the semcal ecosystem.

use thiserror::Error;

/// Errors that can occur in semcal operations.
#[derive(Error, Debug)]
pub enum SemcalError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Selected date falls on a Sunday: {0}")]
    SundayDate(String),

    #[error("Missing required field: {0}")]
    MissingRequired(&'static str),

    #[error("Holiday table error: {0}")]
    HolidayTable(String),

    #[error("Calendar export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for semcal operations.
pub type SemcalResult<T> = Result<T, SemcalError>;
