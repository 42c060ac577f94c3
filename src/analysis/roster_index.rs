//! Eligible-worker indexing.
//!
//! This module derives the set of eligible worker identifiers from roster
//! records.

use std::collections::BTreeSet;

use crate::models::{RosterRecord, WorkerId};

/// Returns the set of eligible worker identifiers in a roster.
///
/// A worker is eligible iff their record carries an identifier and both the
/// active and productive flags are set against the canonical truthy
/// encoding. Records without an identifier are dropped before filtering,
/// and duplicate eligible ids from duplicate rows collapse to one entry.
///
/// Pure function of its input; the roster is never mutated.
///
/// # Example
///
/// ```
/// use attendance_engine::analysis::eligible_workers;
/// use attendance_engine::models::{RosterRecord, WorkerId};
///
/// let roster: Vec<RosterRecord> = serde_json::from_str(
///     r#"[
///         {"id": 1, "active": 1.0, "productive": 1.0},
///         {"id": 2, "active": 1.0, "productive": 0.0}
///     ]"#,
/// ).unwrap();
///
/// let eligible = eligible_workers(&roster);
/// assert_eq!(eligible.len(), 1);
/// assert!(eligible.contains(&WorkerId::Num(1)));
/// ```
pub fn eligible_workers(roster: &[RosterRecord]) -> BTreeSet<WorkerId> {
    roster
        .iter()
        .filter(|record| record.is_eligible())
        .filter_map(|record| record.id.clone())
        .collect()
}
