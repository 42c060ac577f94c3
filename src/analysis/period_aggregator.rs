//! Period aggregation across an inclusive date range.
//!
//! This module drives the single-date gap analyzer over every calendar day
//! of a report period and derives the period-level summary.

use std::collections::BTreeMap;

use crate::data::AttendanceData;
use crate::models::{PeriodReport, PeriodSummary, ReportPeriod};

use super::gap_analyzer::analyze;

/// Aggregates gap analysis over every date in the period, inclusive.
///
/// Dates are processed sequentially in ascending order, one analyzer call
/// per date; a failed date is recorded as an errored daily report and
/// iteration continues, so one unreadable date never invalidates the rest
/// of the period. Summary counts are derived in a single pass after the
/// loop completes.
///
/// Assumes the period was produced by
/// [`validate_date_range`](super::validate_date_range); an inverted period
/// yields an empty report.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::aggregate;
/// use attendance_engine::data::InMemoryData;
/// use attendance_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let data = InMemoryData::new(
///     serde_json::from_str(r#"[{"id": 1, "active": 1.0, "productive": 1.0}]"#).unwrap(),
///     vec![],
/// );
/// let period = ReportPeriod::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
/// );
///
/// let report = aggregate(&data, &period);
/// assert_eq!(report.summary.total_days, 3);
/// assert_eq!(report.summary.days_with_absentees, 3);
/// ```
pub fn aggregate(data: &impl AttendanceData, period: &ReportPeriod) -> PeriodReport {
    let mut days = BTreeMap::new();
    for date in period.dates() {
        days.insert(date, analyze(data, date));
    }

    let summary = PeriodSummary::from_days(&days);
    PeriodReport {
        start_date: period.start_date,
        end_date: period.end_date,
        days,
        summary,
    }
}
