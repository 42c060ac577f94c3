//! Attendance Gap Analysis Engine
//!
//! This crate reconciles a roster of eligible personnel against daily presence
//! records, producing per-day and per-period reports of expected-but-absent
//! workers ("absentees").

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
