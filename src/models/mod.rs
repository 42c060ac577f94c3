//! Core data models for the Attendance Gap Analysis Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod gap_report;
mod presence;
mod report_period;
mod worker;

pub use gap_report::{DailyGapReport, PeriodReport, PeriodSummary};
pub use presence::PresenceRecord;
pub use report_period::ReportPeriod;
pub use worker::{Flag, RosterRecord, WorkerId};
