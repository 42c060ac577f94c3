//! Presence record model.
//!
//! This module defines the attendance record linking a worker to the
//! calendar date on which their presence was registered.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};

use super::WorkerId;

/// One row of attendance data.
///
/// The recording timestamp may carry a time-of-day component; presence
/// comparisons only ever use the calendar-date portion (see [`date`]).
/// Multiple records for the same worker on the same date collapse to a
/// single "present" fact when indexed.
///
/// [`date`]: PresenceRecord::date
///
/// # Example
///
/// ```
/// use attendance_engine::models::{PresenceRecord, WorkerId};
/// use chrono::NaiveDate;
///
/// let record: PresenceRecord = serde_json::from_str(
///     r#"{"worker_id": 1, "recorded_at": "2025-01-01T07:42:00"}"#,
/// ).unwrap();
/// assert_eq!(record.worker_id, Some(WorkerId::Num(1)));
/// assert_eq!(record.date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceRecord {
    /// The identifier of the worker recorded as present, absent when the
    /// source cell was empty.
    #[serde(default)]
    pub worker_id: Option<WorkerId>,
    /// When the presence was registered. Accepts a datetime
    /// (`2025-01-01T07:42:00`, space separator also allowed) or a bare date
    /// (`2025-01-01`, midnight assumed) on deserialization.
    #[serde(deserialize_with = "deserialize_recorded_at")]
    pub recorded_at: NaiveDateTime,
}

impl PresenceRecord {
    /// Returns the calendar date of this record, discarding any time-of-day.
    pub fn date(&self) -> NaiveDate {
        self.recorded_at.date()
    }
}

fn deserialize_recorded_at<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        // Bare dates carry no time-of-day; it is discarded anyway.
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    Err(de::Error::custom(format!(
        "invalid presence timestamp '{}'",
        raw
    )))
}
