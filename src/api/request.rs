//! Request types for the Attendance Gap Analysis Engine API.
//!
//! This module defines the JSON request structure for the `/report`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{PresenceRecord, RosterRecord};

/// Request body for the `/report` endpoint.
///
/// Dates arrive as raw strings and pass through date-range validation
/// before any analysis runs; the record collections arrive already parsed
/// (adapting a concrete spreadsheet's column names to these logical fields
/// is the data-loading collaborator's job).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The start date of the requested period, inclusive.
    pub start_date: String,
    /// The end date of the requested period, inclusive.
    pub end_date: String,
    /// Optional chrono format override for the two date strings; the
    /// engine settings' format applies when absent.
    #[serde(default)]
    pub date_format: Option<String>,
    /// The roster records to derive eligibility from.
    pub roster: Vec<RosterRecord>,
    /// The presence records to derive daily attendance from.
    pub presence: Vec<PresenceRecord>,
}
