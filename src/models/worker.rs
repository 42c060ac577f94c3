//! Worker identity and roster record types.
//!
//! This module defines the opaque worker identifier, the canonical-truthy
//! roster flag encoding, and the roster record used to derive eligibility.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque worker identifier.
///
/// Source data encodes identifiers as either numbers or strings; numeric
/// cells originating from spreadsheets surface as floats (e.g. `17.0`) and
/// are normalized to integers. Identifiers are ordered (numeric before
/// textual) so sets of ids render deterministically in reports.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WorkerId;
///
/// let id: WorkerId = serde_json::from_str("17.0").unwrap();
/// assert_eq!(id, WorkerId::Num(17));
///
/// let id: WorkerId = serde_json::from_str("\"W-204\"").unwrap();
/// assert_eq!(id, WorkerId::Text("W-204".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkerId {
    /// A numeric identifier.
    Num(i64),
    /// A textual identifier.
    Text(String),
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerId::Num(n) => write!(f, "{}", n),
            WorkerId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for WorkerId {
    fn from(n: i64) -> Self {
        WorkerId::Num(n)
    }
}

impl From<&str> for WorkerId {
    fn from(s: &str) -> Self {
        WorkerId::Text(s.to_string())
    }
}

impl Serialize for WorkerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WorkerId::Num(n) => serializer.serialize_i64(*n),
            WorkerId::Text(s) => serializer.serialize_str(s),
        }
    }
}

struct WorkerIdVisitor;

impl Visitor<'_> for WorkerIdVisitor {
    type Value = WorkerId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a numeric or string worker identifier")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(WorkerId::Num(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        if v <= i64::MAX as u64 {
            Ok(WorkerId::Num(v as i64))
        } else {
            Ok(WorkerId::Text(v.to_string()))
        }
    }

    // Integral floats (spreadsheet-exported numeric cells) collapse to
    // integers; anything else keeps its text rendering.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
            Ok(WorkerId::Num(v as i64))
        } else {
            Ok(WorkerId::Text(v.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(WorkerId::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(WorkerId::Text(v))
    }
}

impl<'de> Deserialize<'de> for WorkerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WorkerIdVisitor)
    }
}

/// Boolean-like roster flag.
///
/// The source data encodes "true" as the canonical float `1.0` and "false"
/// as `0.0`. A flag is set iff the value equals the canonical truthy
/// encoding exactly (`1.0`, `1`, or `true`); any other value, including a
/// missing one, is unset. No fuzzy comparison is performed.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Flag;
///
/// let set: Flag = serde_json::from_str("1.0").unwrap();
/// assert!(set.is_set());
///
/// let unset: Flag = serde_json::from_str("0.0").unwrap();
/// assert!(!unset.is_set());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flag(bool);

impl Flag {
    /// Returns true if the flag carries the canonical truthy encoding.
    pub fn is_set(self) -> bool {
        self.0
    }
}

impl From<bool> for Flag {
    fn from(v: bool) -> Self {
        Flag(v)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

struct FlagVisitor;

impl Visitor<'_> for FlagVisitor {
    type Value = Flag;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean or 1.0/0.0 flag value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Flag(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Flag(v == 1))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Flag(v == 1))
    }

    // Exact equality against the canonical 1.0 encoding, never fuzzy.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Flag(v == 1.0))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Flag(false))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Flag(false))
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlagVisitor)
    }
}

/// One row of roster data.
///
/// A worker is *eligible* iff the record carries an identifier and both the
/// active and productive flags are set. Records without an identifier are
/// excluded from eligibility regardless of their flags.
///
/// # Example
///
/// ```
/// use attendance_engine::models::RosterRecord;
///
/// let record: RosterRecord =
///     serde_json::from_str(r#"{"id": 1, "active": 1.0, "productive": 1.0}"#).unwrap();
/// assert!(record.is_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// The worker identifier, absent when the source cell was empty.
    #[serde(default)]
    pub id: Option<WorkerId>,
    /// Whether the worker is active.
    #[serde(default)]
    pub active: Flag,
    /// Whether the worker is productive.
    #[serde(default)]
    pub productive: Flag,
}

impl RosterRecord {
    /// Returns true if this record denotes an eligible worker.
    pub fn is_eligible(&self) -> bool {
        self.id.is_some() && self.active.is_set() && self.productive.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_id_from_integer() {
        let id: WorkerId = serde_json::from_str("42").unwrap();
        assert_eq!(id, WorkerId::Num(42));
    }

    #[test]
    fn test_worker_id_from_integral_float() {
        let id: WorkerId = serde_json::from_str("42.0").unwrap();
        assert_eq!(id, WorkerId::Num(42));
    }

    #[test]
    fn test_worker_id_from_fractional_float_keeps_text_rendering() {
        let id: WorkerId = serde_json::from_str("42.5").unwrap();
        assert_eq!(id, WorkerId::Text("42.5".to_string()));
    }

    #[test]
    fn test_worker_id_from_string() {
        let id: WorkerId = serde_json::from_str("\"W-204\"").unwrap();
        assert_eq!(id, WorkerId::Text("W-204".to_string()));
    }

    #[test]
    fn test_numeric_and_text_ids_are_distinct() {
        // "17" the string never equals 17 the number
        assert_ne!(WorkerId::from("17"), WorkerId::from(17));
    }

    #[test]
    fn test_worker_id_ordering_is_deterministic() {
        let mut ids = vec![
            WorkerId::from("beta"),
            WorkerId::from(30),
            WorkerId::from("alpha"),
            WorkerId::from(2),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                WorkerId::from(2),
                WorkerId::from(30),
                WorkerId::from("alpha"),
                WorkerId::from("beta"),
            ]
        );
    }

    #[test]
    fn test_worker_id_display() {
        assert_eq!(WorkerId::from(17).to_string(), "17");
        assert_eq!(WorkerId::from("W-204").to_string(), "W-204");
    }

    #[test]
    fn test_worker_id_serialize_round_trip() {
        let num = WorkerId::from(17);
        let json = serde_json::to_string(&num).unwrap();
        assert_eq!(json, "17");
        assert_eq!(serde_json::from_str::<WorkerId>(&json).unwrap(), num);

        let text = WorkerId::from("W-204");
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, "\"W-204\"");
        assert_eq!(serde_json::from_str::<WorkerId>(&json).unwrap(), text);
    }

    #[test]
    fn test_flag_canonical_truthy_values() {
        assert!(serde_json::from_str::<Flag>("true").unwrap().is_set());
        assert!(serde_json::from_str::<Flag>("1").unwrap().is_set());
        assert!(serde_json::from_str::<Flag>("1.0").unwrap().is_set());
    }

    #[test]
    fn test_flag_non_canonical_values_are_unset() {
        assert!(!serde_json::from_str::<Flag>("false").unwrap().is_set());
        assert!(!serde_json::from_str::<Flag>("0").unwrap().is_set());
        assert!(!serde_json::from_str::<Flag>("0.0").unwrap().is_set());
        assert!(!serde_json::from_str::<Flag>("2").unwrap().is_set());
        assert!(!serde_json::from_str::<Flag>("0.5").unwrap().is_set());
        assert!(!serde_json::from_str::<Flag>("null").unwrap().is_set());
    }

    #[test]
    fn test_flag_serializes_as_bool() {
        assert_eq!(serde_json::to_string(&Flag::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Flag::from(false)).unwrap(), "false");
    }

    #[test]
    fn test_eligible_record() {
        let record: RosterRecord =
            serde_json::from_str(r#"{"id": 1, "active": 1.0, "productive": 1.0}"#).unwrap();
        assert!(record.is_eligible());
    }

    #[test]
    fn test_inactive_record_is_not_eligible() {
        let record: RosterRecord =
            serde_json::from_str(r#"{"id": 1, "active": 0.0, "productive": 1.0}"#).unwrap();
        assert!(!record.is_eligible());
    }

    #[test]
    fn test_unproductive_record_is_not_eligible() {
        let record: RosterRecord =
            serde_json::from_str(r#"{"id": 1, "active": 1.0, "productive": 0.0}"#).unwrap();
        assert!(!record.is_eligible());
    }

    #[test]
    fn test_null_id_record_is_not_eligible() {
        let record: RosterRecord =
            serde_json::from_str(r#"{"id": null, "active": 1.0, "productive": 1.0}"#).unwrap();
        assert!(!record.is_eligible());
    }

    #[test]
    fn test_missing_fields_default_to_not_eligible() {
        let record: RosterRecord = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(record.id, None);
        assert!(!record.is_eligible());
    }

    #[test]
    fn test_roster_record_round_trip() {
        let record = RosterRecord {
            id: Some(WorkerId::from(7)),
            active: Flag::from(true),
            productive: Flag::from(false),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: RosterRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
