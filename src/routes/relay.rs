//! Gemini relay endpoint
//!
//! Mounted for every method so that the handler, not the router, decides
//! what a non-POST request receives.

use std::sync::Arc;

use axum::{extract::State, http::Method};
use bytes::Bytes;

use crate::{
    relay::{InboundRequest, OutboundResponse},
    AppState,
};

/// Relay a prompt to the upstream API
pub async fn gemini_proxy(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> OutboundResponse {
    state.relay.handle(InboundRequest::new(method, body)).await
}
