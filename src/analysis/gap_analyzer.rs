//! Gap analysis for a single date.
//!
//! This module computes the absentee set for one calendar date by
//! differencing the eligible-worker set against the present-worker set.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::data::AttendanceData;
use crate::error::EngineResult;
use crate::models::{DailyGapReport, WorkerId};

use super::date_range::parse_date;
use super::presence_index::present_workers;
use super::roster_index::eligible_workers;

/// Analyzes attendance gaps for one date.
///
/// Reads the roster and presence collections through the data seam, derives
/// the eligible and present sets, and reports `absent = eligible - present`.
/// `present_count` is the raw presence volume for the date (ineligible
/// workers included); `absent_count` counts only eligible workers with no
/// presence record.
///
/// This function never fails past its boundary: a data access error is
/// recorded as an error-flagged report with zeroed counts, which the period
/// aggregator treats as a recorded failure rather than aborting the period.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::analyze;
/// use attendance_engine::data::InMemoryData;
/// use attendance_engine::models::WorkerId;
/// use chrono::NaiveDate;
///
/// let data = InMemoryData::new(
///     serde_json::from_str(
///         r#"[
///             {"id": 1, "active": 1.0, "productive": 1.0},
///             {"id": 2, "active": 1.0, "productive": 0.0},
///             {"id": 3, "active": 1.0, "productive": 1.0}
///         ]"#,
///     )
///     .unwrap(),
///     serde_json::from_str(r#"[{"worker_id": 1, "recorded_at": "2025-01-01"}]"#).unwrap(),
/// );
///
/// let report = analyze(&data, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert_eq!(report.eligible_count, 2);
/// assert_eq!(report.absent_ids, [WorkerId::Num(3)].into());
/// ```
pub fn analyze(data: &impl AttendanceData, date: NaiveDate) -> DailyGapReport {
    let roster = match data.roster() {
        Ok(records) => records,
        Err(err) => return DailyGapReport::failed(date, err.to_string()),
    };
    let presence = match data.presence() {
        Ok(records) => records,
        Err(err) => return DailyGapReport::failed(date, err.to_string()),
    };

    let eligible = eligible_workers(roster);
    let present = present_workers(presence, date);
    let absent: BTreeSet<WorkerId> = eligible.difference(&present).cloned().collect();

    DailyGapReport {
        date,
        eligible_count: eligible.len(),
        present_count: present.len(),
        absent_count: absent.len(),
        present_ids: present,
        absent_ids: absent,
        error: None,
    }
}

/// Analyzes attendance gaps for a date given as a string.
///
/// Parses `date_str` under `format` and delegates to [`analyze`]. An
/// unparseable date is a request-level validation failure and surfaces as
/// [`crate::error::EngineError::InvalidDateFormat`] before any analysis
/// runs; data access errors are still recovered into the report.
pub fn analyze_str(
    data: &impl AttendanceData,
    date_str: &str,
    format: &str,
) -> EngineResult<DailyGapReport> {
    let date = parse_date(date_str, format)?;
    Ok(analyze(data, date))
}
