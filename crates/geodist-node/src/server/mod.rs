//! HTTP server
//!
//! This module wires the REST handlers, CORS and the request timeout
//! into an axum router.

pub mod error;
pub mod messages;
pub mod rest;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::AppState;

/// Create the server router
pub fn create_router(state: Arc<AppState>) -> Router {
    let server_config = &state.config.server;

    let mut router = Router::new()
        // Health check
        .route("/health", get(rest::health))
        // Service info
        .route("/api/info", get(rest::node_info))
        // Distance RPC
        .route("/api/geodesic_distance", post(rest::geodesic_distance))
        .route("/api/units", get(rest::list_units))
        .layer(TimeoutLayer::new(server_config.request_timeout));

    if server_config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
