//! Error types for gap-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GapError {
    /// The input document was not valid JSON or did not match the expected shape.
    #[error("Invalid search document: {0}")]
    Json(#[from] serde_json::Error),

    /// A date string was not a real calendar date in `YYYY-MM-DD` form.
    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    /// A range whose end date falls before its start date.
    #[error("Inverted range for {field}: {start} is after {end}")]
    InvertedRange {
        field: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

pub type Result<T> = std::result::Result<T, GapError>;
