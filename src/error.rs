//! Request-level error handling.
//!
//! Any error surfaced by a route handler is logged with full detail on the
//! server side and answered with a fixed generic message, so internal error
//! text never reaches the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Body returned for every unhandled route error.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, detail = ?self, "Unhandled error in route handler");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": GENERIC_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
