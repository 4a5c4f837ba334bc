//! Root status endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / — returns a fixed banner confirming the service is up.
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Mock AI Service is running",
    })
}
