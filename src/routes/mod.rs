//! HTTP routes for the relay
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod health;
pub mod relay;

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultOnFailure, TraceLayer},
};
use tracing::Level;

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Answers browser preflight requests; the relay sets its own
    // allow-origin header on every response it produces
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let relay_routes = Router::new().route(&state.config.relay_path, any(relay::gemini_proxy));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check));

    Router::new()
        .merge(public_routes)
        .merge(relay_routes)
        // The relay logs its own failures; 5xx here is only a trace detail
        .layer(TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::DEBUG)))
        .layer(cors)
        .with_state(state)
}
