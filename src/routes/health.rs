//! Health check endpoint for container orchestration and the keep-alive
//! prober.
//!
//! This is a liveness probe: it only checks that the process can respond to
//! HTTP. No dependency checks by design, so a degraded database never makes
//! the host platform recycle the service.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::SERVICE_NAME;

/// JSON body returned by `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// ISO-8601 instant captured at request time.
    pub timestamp: String,
    pub service: &'static str,
}

/// `GET /health` handler. Always 200 under normal operation.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME,
    })
}
