//! Configuration loading and management for the Attendance Gap Analysis Engine.
//!
//! This module provides the engine settings loaded from a YAML file:
//! the date format expected from callers and the optional cap on report
//! period length enforced at the HTTP boundary.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::EngineSettings;
//!
//! let settings = EngineSettings::load("./config/settings.yaml").unwrap();
//! println!("Date format: {}", settings.date_format);
//! ```

mod loader;
mod types;

pub use types::EngineSettings;
