//! Configuration types for the Attendance Gap Analysis Engine.
//!
//! This module contains the strongly-typed settings structure deserialized
//! from the YAML settings file.

use serde::Deserialize;

use crate::analysis::DEFAULT_DATE_FORMAT;

/// Engine settings.
///
/// `date_format` is the chrono format date-string inputs are validated
/// against. `max_period_days` caps the length of a requested report period
/// at the HTTP boundary; the analysis core itself accepts any validated
/// period.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// The chrono format for date-string inputs.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Maximum allowed period length in days, unlimited when absent.
    #[serde(default)]
    pub max_period_days: Option<i64>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            max_period_days: None,
        }
    }
}
