//! Analysis logic for the Attendance Gap Analysis Engine.
//!
//! This module contains the attendance reconciliation pipeline: deriving
//! the eligible-worker set from roster records, deriving the present-worker
//! set for a date from presence records, differencing the two into a daily
//! absentee report, aggregating daily reports across an inclusive date
//! range, and validating date-range inputs before aggregation begins.

mod date_range;
mod gap_analyzer;
mod period_aggregator;
mod presence_index;
mod roster_index;

pub use date_range::{parse_date, validate_date_range, DEFAULT_DATE_FORMAT};
pub use gap_analyzer::{analyze, analyze_str};
pub use period_aggregator::aggregate;
pub use presence_index::present_workers;
pub use roster_index::eligible_workers;
