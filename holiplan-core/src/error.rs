//! Error types for holiplan.

use thiserror::Error;

/// Errors that can occur in holiplan operations.
#[derive(Error, Debug)]
pub enum HoliplanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch holidays for {country} ({year}): {reason}")]
    HolidayFetch {
        country: String,
        year: i32,
        reason: String,
    },

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("A calendar with ID \"{0}\" already exists")]
    DuplicateCalendar(String),

    #[error("Calendar with ID \"{0}\" not found")]
    CalendarNotFound(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid grid key '{0}'. Expected month-day, e.g. 0-1")]
    InvalidGridKey(String),

    #[error("Invalid theme '{0}'. Expected 'light' or 'dark'")]
    InvalidTheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for HoliplanError {
    fn from(err: serde_json::Error) -> Self {
        HoliplanError::Serialization(err.to_string())
    }
}

/// Result type alias for holiplan operations.
pub type HoliplanResult<T> = Result<T, HoliplanError>;
