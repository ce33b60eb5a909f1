//! Unified error handling for the server.
//!
//! Every failure a report can hit is a store failure, and clients see the
//! same fixed 500 body for all of them. The cause is only logged.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storage::StoreError;

/// Message returned to clients for any store failure.
pub const DATABASE_ERROR: &str = "Database error";

/// Application error type with HTTP response mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Query execution failed (500).
    #[error("database error: {0}")]
    Database(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(source) => {
                tracing::error!(error = %source, "report query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": DATABASE_ERROR })),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
