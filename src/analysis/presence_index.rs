//! Present-worker indexing for a target date.
//!
//! This module derives, for a given calendar date, the set of worker
//! identifiers with at least one presence record on that date.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{PresenceRecord, WorkerId};

/// Returns the set of worker identifiers present on the target date.
///
/// Each record's timestamp is reduced to its calendar-date portion before
/// comparison, records without a worker identifier are dropped, and
/// repeated records for the same worker collapse to a single membership
/// fact (presence is idempotent, not a count).
///
/// Pure function of its input; the records are never mutated.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::present_workers;
/// use attendance_engine::models::{PresenceRecord, WorkerId};
/// use chrono::NaiveDate;
///
/// let records: Vec<PresenceRecord> = serde_json::from_str(
///     r#"[
///         {"worker_id": 1, "recorded_at": "2025-01-01T07:42:00"},
///         {"worker_id": 1, "recorded_at": "2025-01-01T16:05:00"},
///         {"worker_id": 2, "recorded_at": "2025-01-02"}
///     ]"#,
/// ).unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let present = present_workers(&records, date);
/// assert_eq!(present.len(), 1);
/// assert!(present.contains(&WorkerId::Num(1)));
/// ```
pub fn present_workers(records: &[PresenceRecord], date: NaiveDate) -> BTreeSet<WorkerId> {
    records
        .iter()
        .filter(|record| record.date() == date)
        .filter_map(|record| record.worker_id.clone())
        .collect()
}
