//! Date-range validation.
//!
//! This module is the sole gate between raw date-string inputs and the
//! period aggregator: external callers (HTTP handlers, batch drivers) must
//! validate here before requesting a period report, and downstream
//! components trust its postconditions.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::ReportPeriod;

/// The date format expected from external callers, `YYYY-MM-DD`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date string under the given chrono format.
///
/// Fails with [`EngineError::InvalidDateFormat`] when the string does not
/// match the format (impossible calendar dates included).
pub fn parse_date(input: &str, format: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input, format).map_err(|_| EngineError::InvalidDateFormat {
        input: input.to_string(),
        format: format.to_string(),
    })
}

/// Validates a pair of date strings into an ordered report period.
///
/// Fails with [`EngineError::InvalidDateFormat`] when either string cannot
/// be parsed under `format`, and with [`EngineError::InvalidDateOrder`]
/// when the end date precedes the start date. Validation errors are fatal
/// to the whole report request and surface before any per-date analysis.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::{validate_date_range, DEFAULT_DATE_FORMAT};
///
/// let period = validate_date_range("2025-01-01", "2025-01-03", DEFAULT_DATE_FORMAT).unwrap();
/// assert_eq!(period.num_days(), 3);
///
/// assert!(validate_date_range("2025-02-10", "2025-02-01", DEFAULT_DATE_FORMAT).is_err());
/// ```
pub fn validate_date_range(
    start_str: &str,
    end_str: &str,
    format: &str,
) -> EngineResult<ReportPeriod> {
    let start_date = parse_date(start_str, format)?;
    let end_date = parse_date(end_str, format)?;

    if end_date < start_date {
        return Err(EngineError::InvalidDateOrder {
            start: start_date,
            end: end_date,
        });
    }

    Ok(ReportPeriod::new(start_date, end_date))
}
