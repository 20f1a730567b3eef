//! Welcome endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed payload identifying the service.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// `GET /` handler. Pure; repeated calls return identical JSON.
pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Supply Chain API",
    })
}
