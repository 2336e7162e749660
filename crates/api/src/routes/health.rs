use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// RFC 3339 UTC timestamp of the probe.
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,
    /// Whether the database round-trip succeeded.
    pub database: &'static str,
    /// Probe failure detail, present only when unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health -- liveness/readiness probe with a live database round-trip.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let time_stamp = chrono::Utc::now().to_rfc3339();

    match pricelist_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                time_stamp,
                database: "connected",
                error: None,
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    time_stamp,
                    database: "disconnected",
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
