//! Upstream API abstraction
//!
//! The relay talks to the generative-text API only through [`GenerativeApi`],
//! so the outbound call can be swapped for an in-process double in tests.

use async_trait::async_trait;
use axum::http::StatusCode;
use secrecy::SecretString;

use crate::error::RelayResult;
use crate::proxy::types::GenerateContentRequest;

/// Raw answer from the upstream API
///
/// The status is not interpreted here; classifying it is the relay's job.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
}

impl UpstreamReply {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait defining the interface for the upstream generative-text API
///
/// # Security
///
/// Implementations MUST:
/// - Never log the API key or any URL that embeds it
/// - Never forward client headers upstream
#[async_trait]
pub trait GenerativeApi: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Model requests are sent to
    fn model(&self) -> &str;

    /// Send one generateContent request
    ///
    /// Returns `Err` only when no HTTP answer was obtained (connection,
    /// TLS, timeout, body read). Non-success statuses come back as `Ok`.
    async fn generate_content(
        &self,
        api_key: &SecretString,
        payload: &GenerateContentRequest,
    ) -> RelayResult<UpstreamReply>;
}
