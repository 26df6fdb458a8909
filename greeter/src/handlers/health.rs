use axum::Json;
use common::HealthStatus;

/// Health check endpoint
///
/// Returns 200 OK with a fixed status body
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::up())
}
