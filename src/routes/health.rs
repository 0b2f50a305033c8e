//! Health check endpoints
//!
//! - `/health` - Service status, version, uptime and key configuration
//! - `/health/live` - Liveness probe

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{proxy::GenerativeApi, secrets::SecretSource, AppState};

/// Health status enum
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Upstream configuration as seen by the relay
#[derive(Debug, Serialize)]
pub struct UpstreamCheck {
    pub provider: &'static str,
    pub model: String,
    pub api_key_configured: bool,
}

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub upstream: UpstreamCheck,
}

/// Simple health response for liveness
#[derive(Debug, Serialize)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

/// Full health check endpoint
///
/// A missing API key does not stop the process from serving, but every
/// relay call would fail, so the service reports itself as degraded.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let api_key_configured = state.secrets.api_key().is_some();

    let status = if api_key_configured {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        upstream: UpstreamCheck {
            provider: state.upstream.name(),
            model: state.upstream.model().to_string(),
            api_key_configured,
        },
    };

    (StatusCode::OK, Json(response))
}

/// Liveness probe endpoint
///
/// Returns 200 OK if the application is alive.
pub async fn liveness_check() -> (StatusCode, Json<SimpleHealthResponse>) {
    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}
