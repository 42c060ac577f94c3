//! HTTP API module for the Attendance Gap Analysis Engine.
//!
//! This module provides the REST API endpoint for generating absentee
//! period reports from roster and presence data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::ApiError;
pub use state::AppState;
