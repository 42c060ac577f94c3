//! Gap report models.
//!
//! This module contains the per-date and per-period report types produced
//! by the analysis engine: [`DailyGapReport`], [`PeriodSummary`], and
//! [`PeriodReport`].

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WorkerId;

/// The outcome of analyzing attendance gaps for a single date.
///
/// A report is either a successful analysis or a recorded failure: when
/// `error` is set, every count is zero and both id sets are empty. Failed
/// reports participate in period aggregation as errored entries rather than
/// being silently skipped.
///
/// Successful reports uphold `absent_ids = eligible_ids - present_ids`.
/// Note the deliberate asymmetry carried over from the source system:
/// `present_count` is the raw volume of workers present on the date,
/// ineligible workers included, while absentees are computed only against
/// the eligible set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGapReport {
    /// The analyzed date.
    pub date: NaiveDate,
    /// Number of eligible (active and productive) workers.
    pub eligible_count: usize,
    /// Identifiers of all workers present on the date, eligible or not.
    pub present_ids: BTreeSet<WorkerId>,
    /// Identifiers of eligible workers with no presence record on the date.
    pub absent_ids: BTreeSet<WorkerId>,
    /// Raw count of workers present on the date (not restricted to the
    /// eligible set).
    pub present_count: usize,
    /// Count of eligible workers absent on the date.
    pub absent_count: usize,
    /// Set when the date could not be analyzed; all other fields are zeroed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DailyGapReport {
    /// Creates an error-flagged report with zeroed counts for a date that
    /// could not be analyzed.
    pub fn failed(date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            date,
            eligible_count: 0,
            present_ids: BTreeSet::new(),
            absent_ids: BTreeSet::new(),
            present_count: 0,
            absent_count: 0,
            error: Some(message.into()),
        }
    }

    /// Returns true if this report records a failure instead of a result.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns true if this report found at least one absentee.
    ///
    /// Always false for errored reports.
    pub fn has_absentees(&self) -> bool {
        !self.is_error() && self.absent_count > 0
    }
}

/// Summary statistics over the daily reports of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Number of days covered by the period, errored days included.
    pub total_days: usize,
    /// Days analyzed without error where at least one absentee was found.
    pub days_with_absentees: usize,
    /// Days analyzed without error where every eligible worker was present.
    pub days_without_absentees: usize,
    /// Days whose analysis failed.
    pub days_with_errors: usize,
}

impl PeriodSummary {
    /// Derives the summary in a single pass over collected daily reports.
    pub fn from_days(days: &BTreeMap<NaiveDate, DailyGapReport>) -> Self {
        let mut summary = PeriodSummary {
            total_days: days.len(),
            days_with_absentees: 0,
            days_without_absentees: 0,
            days_with_errors: 0,
        };
        for report in days.values() {
            if report.is_error() {
                summary.days_with_errors += 1;
            } else if report.absent_count > 0 {
                summary.days_with_absentees += 1;
            } else {
                summary.days_without_absentees += 1;
            }
        }
        summary
    }
}

/// The full result of aggregating gap analysis across a date range.
///
/// The `days` map holds one entry per calendar day in the inclusive range,
/// keyed and iterated in ascending date order for stable report rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// The start date of the aggregated period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the aggregated period (inclusive).
    pub end_date: NaiveDate,
    /// One daily report per date, in ascending date order.
    pub days: BTreeMap<NaiveDate, DailyGapReport>,
    /// Summary statistics derived from `days`.
    pub summary: PeriodSummary,
}
