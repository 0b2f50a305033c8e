//! Request logging utilities for the relay
//!
//! Provides structured logging with a short correlation ID so every line of
//! one invocation can be grouped. Nothing logged here may contain the API key.

use std::time::Instant;

use axum::http::{Method, StatusCode};
use tracing::{debug, error, info, warn, Span};
use uuid::Uuid;

use crate::error::RelayError;

/// Terminal state of one relay invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Failed before any upstream call was made
    Rejected,
    /// Upstream answered non-2xx, or the call or its parsing failed
    UpstreamFailed,
    /// Upstream answered 2xx and the body was relayed
    Succeeded,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Rejected => "rejected",
            Outcome::UpstreamFailed => "upstream_failed",
            Outcome::Succeeded => "succeeded",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context for tracking one invocation through the logs
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Upstream provider handling this request
    pub provider: String,
    /// Model the prompt is sent to
    pub model: String,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str, model: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider: provider.to_string(),
            model: model.to_string(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    pub fn log_request_start(&self, method: &Method, body_size: usize) {
        info!(
            trace_id = %self.trace_id,
            method = %method,
            body_size = %body_size,
            "Relay request started"
        );
    }

    pub fn log_upstream_request(&self, text_len: usize) {
        debug!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = %self.model,
            text_len = %text_len,
            elapsed_ms = %self.elapsed_ms(),
            "Sending prompt upstream"
        );
    }

    pub fn log_upstream_response(&self, status: StatusCode, body_size: usize) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = %self.model,
            status = %status.as_u16(),
            body_size = %body_size,
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
    }

    /// Log the failure that ended this invocation
    ///
    /// Called exactly once per failed invocation.
    pub fn log_failure(&self, err: &RelayError) {
        match err {
            RelayError::InvalidMethod(_) | RelayError::InvalidInput(_) => {
                warn!(
                    trace_id = %self.trace_id,
                    error = %err,
                    "Request rejected"
                );
            }
            RelayError::MissingConfiguration(var) => {
                error!(
                    trace_id = %self.trace_id,
                    variable = %var,
                    "Upstream API key is not configured"
                );
            }
            RelayError::UpstreamFailure { status, body } => {
                error!(
                    trace_id = %self.trace_id,
                    provider = %self.provider,
                    model = %self.model,
                    status = %status.as_u16(),
                    body = %body,
                    elapsed_ms = %self.elapsed_ms(),
                    "Upstream API returned an error"
                );
            }
            RelayError::HttpError(_) | RelayError::JsonError(_) | RelayError::Internal(_) => {
                error!(
                    trace_id = %self.trace_id,
                    provider = %self.provider,
                    model = %self.model,
                    elapsed_ms = %self.elapsed_ms(),
                    error = %err,
                    "Unexpected error in relay"
                );
            }
        }
    }

    pub fn log_request_complete(&self, outcome: Outcome, status: StatusCode) {
        info!(
            trace_id = %self.trace_id,
            outcome = %outcome,
            status = %status.as_u16(),
            elapsed_ms = %self.elapsed_ms(),
            "Relay request completed"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "relay_request",
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = %self.model,
        )
    }
}
