//! Data access seam for roster and presence collections.
//!
//! The engine consumes already-parsed tabular records; loading them from a
//! concrete source (spreadsheet, database, request body) is an external
//! collaborator's responsibility. This module defines the seam through which
//! the analysis components read those collections, and the standard
//! in-memory implementation backing one report request.

use crate::error::EngineResult;
use crate::models::{PresenceRecord, RosterRecord};

/// Read access to the roster and presence collections backing one analysis.
///
/// Implementations must return stable, unmutated views for the duration of
/// one aggregation call; the analysis components treat them as immutable
/// snapshots. Access is fallible so that backends where reads can fail
/// surface [`crate::error::EngineError::DataAccess`], which the gap analyzer
/// records per date instead of propagating.
pub trait AttendanceData {
    /// Returns the roster records.
    fn roster(&self) -> EngineResult<&[RosterRecord]>;

    /// Returns the presence records.
    fn presence(&self) -> EngineResult<&[PresenceRecord]>;
}

/// Roster and presence collections held in memory.
///
/// The standard backing store: the loading collaborator parses its source
/// once per request and hands the collections over; access never fails.
///
/// # Example
///
/// ```
/// use attendance_engine::data::{AttendanceData, InMemoryData};
///
/// let data = InMemoryData::new(vec![], vec![]);
/// assert!(data.roster().unwrap().is_empty());
/// assert!(data.presence().unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryData {
    roster: Vec<RosterRecord>,
    presence: Vec<PresenceRecord>,
}

impl InMemoryData {
    /// Creates a store from already-parsed record collections.
    pub fn new(roster: Vec<RosterRecord>, presence: Vec<PresenceRecord>) -> Self {
        Self { roster, presence }
    }
}

impl AttendanceData for InMemoryData {
    fn roster(&self) -> EngineResult<&[RosterRecord]> {
        Ok(&self.roster)
    }

    fn presence(&self) -> EngineResult<&[PresenceRecord]> {
        Ok(&self.presence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flag, WorkerId};

    #[test]
    fn test_in_memory_data_returns_records() {
        let roster = vec![RosterRecord {
            id: Some(WorkerId::Num(1)),
            active: Flag::from(true),
            productive: Flag::from(true),
        }];
        let data = InMemoryData::new(roster.clone(), vec![]);
        assert_eq!(data.roster().unwrap(), roster.as_slice());
        assert!(data.presence().unwrap().is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let data = InMemoryData::default();
        assert!(data.roster().unwrap().is_empty());
        assert!(data.presence().unwrap().is_empty());
    }
}
