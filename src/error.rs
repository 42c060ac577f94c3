//! Error types for the Attendance Gap Analysis Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during gap analysis.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Gap Analysis Engine.
///
/// Date-range validation errors are fatal to a report request and surface
/// before any per-date analysis begins. Data access errors are recovered
/// per date into an error-flagged daily report and never abort a period.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidDateFormat {
///     input: "10-02-2025".to_string(),
///     format: "%Y-%m-%d".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date '10-02-2025': expected format %Y-%m-%d"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string could not be parsed under the expected format.
    #[error("Invalid date '{input}': expected format {format}")]
    InvalidDateFormat {
        /// The input string that failed to parse.
        input: String,
        /// The format the input was expected to match.
        format: String,
    },

    /// The end date of a requested period precedes its start date.
    #[error("Invalid date order: end date {end} precedes start date {start}")]
    InvalidDateOrder {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The underlying record collections could not be read.
    #[error("Data access error: {message}")]
    DataAccess {
        /// A description of the access failure.
        message: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
