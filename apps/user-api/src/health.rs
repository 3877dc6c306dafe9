//! Service health endpoint.

use axum::Json;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;
use utoipa::ToSchema;

static STARTED_AT: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the process started serving.
    pub uptime_seconds: u64,
    /// Current UTC time (RFC 3339).
    pub timestamp: String,
}

/// Record the service start time. Called once during startup so the
/// reported uptime does not begin at the first probe.
pub fn mark_started() {
    LazyLock::force(&STARTED_AT);
}

/// GET /health - Service liveness and basic metadata.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: STARTED_AT.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy_with_version() {
        let Json(response) = health_handler().await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
