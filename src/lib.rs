//! Mock AI inference service.
//!
//! Stands in for a real inference backend during integration testing of
//! downstream clients: three stateless endpoints returning canned or
//! randomized responses, with structured logging (tracing) on every
//! request.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::index))
        .route("/health", get(routes::health::check))
        .route("/predict", post(routes::predict::predict))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
