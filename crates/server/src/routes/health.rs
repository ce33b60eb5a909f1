//! Health check endpoint.

use axum::Json;

use crate::dto::HealthResponse;

/// Liveness probe: `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
