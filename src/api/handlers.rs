//! HTTP request handlers for the Attendance Gap Analysis Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{aggregate, validate_date_range};
use crate::data::InMemoryData;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts a period report request and returns the aggregated absentee
/// report. Date-range validation runs before any per-date analysis; a
/// validation failure fails the whole request, while per-date data issues
/// are recorded inside the returned report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the requested date range before any analysis
    let settings = state.settings();
    let format = request
        .date_format
        .as_deref()
        .unwrap_or(&settings.date_format);
    let period = match validate_date_range(&request.start_date, &request.end_date, format) {
        Ok(period) => period,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Date range validation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Enforce the operational period-length cap, when configured
    if let Some(max_days) = settings.max_period_days {
        if period.num_days() > max_days {
            warn!(
                correlation_id = %correlation_id,
                requested_days = period.num_days(),
                max_days,
                "Requested period exceeds configured maximum"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::period_too_long(period.num_days(), max_days)),
            )
                .into_response();
        }
    }

    // Perform the aggregation
    let data = InMemoryData::new(request.roster, request.presence);
    let start_time = Instant::now();
    let report = aggregate(&data, &period);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        start_date = %report.start_date,
        end_date = %report.end_date,
        total_days = report.summary.total_days,
        days_with_absentees = report.summary.days_with_absentees,
        days_with_errors = report.summary.days_with_errors,
        duration_us = duration.as_micros(),
        "Period report completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::config::EngineSettings;
    use crate::models::PeriodReport;

    fn create_test_state() -> AppState {
        AppState::new(EngineSettings::default())
    }

    async fn post_report(router: Router, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/report")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn valid_request_body() -> String {
        serde_json::json!({
            "start_date": "2025-01-01",
            "end_date": "2025-01-03",
            "roster": [
                {"id": 1, "active": 1.0, "productive": 1.0},
                {"id": 2, "active": 1.0, "productive": 0.0},
                {"id": 3, "active": 1.0, "productive": 1.0}
            ],
            "presence": [
                {"worker_id": 3, "recorded_at": "2025-01-01T07:15:00"}
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_report_success() {
        let router = create_router(create_test_state());
        let (status, body) = post_report(router, valid_request_body()).await;

        assert_eq!(status, StatusCode::OK);
        let report: PeriodReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.summary.total_days, 3);
        assert_eq!(report.summary.days_with_absentees, 3);
        assert_eq!(report.summary.days_with_errors, 0);
    }

    #[tokio::test]
    async fn test_invalid_date_order_is_rejected() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "start_date": "2025-02-10",
            "end_date": "2025-02-01",
            "roster": [],
            "presence": []
        })
        .to_string();

        let (status, body) = post_report(router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DATE_ORDER");
    }

    #[tokio::test]
    async fn test_invalid_date_format_is_rejected() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "start_date": "10-02-2025",
            "end_date": "2025-02-20",
            "roster": [],
            "presence": []
        })
        .to_string();

        let (status, body) = post_report(router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DATE_FORMAT");
    }

    #[tokio::test]
    async fn test_date_format_override() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "start_date": "01/01/2025",
            "end_date": "02/01/2025",
            "date_format": "%d/%m/%Y",
            "roster": [],
            "presence": []
        })
        .to_string();

        let (status, body) = post_report(router, body).await;
        assert_eq!(status, StatusCode::OK);
        let report: PeriodReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.summary.total_days, 2);
    }

    #[tokio::test]
    async fn test_period_cap_is_enforced() {
        let state = AppState::new(EngineSettings {
            max_period_days: Some(7),
            ..EngineSettings::default()
        });
        let router = create_router(state);
        let body = serde_json::json!({
            "start_date": "2025-01-01",
            "end_date": "2025-03-01",
            "roster": [],
            "presence": []
        })
        .to_string();

        let (status, body) = post_report(router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "PERIOD_TOO_LONG");
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let router = create_router(create_test_state());
        let (status, body) = post_report(router, "{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_is_a_validation_error() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "start_date": "2025-01-01",
            "end_date": "2025-01-03"
        })
        .to_string();

        let (status, body) = post_report(router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
