//! Error types for the relay
//!
//! Every way a relay invocation can fail is a variant of [`RelayError`].
//! The variant decides the status code and the envelope the caller sees;
//! internal detail never leaves the process.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::relay::OutboundResponse;

/// Message returned for any method other than POST
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido.";
/// Message returned when the prompt is missing or empty
pub const MISSING_PROMPT_MESSAGE: &str = "Nenhum prompt foi fornecido.";
/// Message returned when the upstream API key is not configured
pub const INCOMPLETE_CONFIGURATION_MESSAGE: &str = "Configuração do servidor incompleta.";
/// Message returned when the upstream API answers with a non-success status
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Falha ao comunicar com a API do Gemini.";
/// Message returned for every unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Ocorreu um erro interno no servidor.";

/// Relay-level errors
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed: {0}")]
    InvalidMethod(Method),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing configuration: {0} is not set")]
    MissingConfiguration(&'static str),

    #[error("Upstream error {status}: {body}")]
    UpstreamFailure { status: StatusCode, body: String },

    #[error("HTTP client error: {0}")]
    HttpError(#[source] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

// The upstream URL carries the API key as a query parameter, so it is
// dropped before the error can be stored or logged.
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::HttpError(err.without_url())
    }
}

/// Error body sent back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl RelayError {
    /// Status code the caller receives for this error
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RelayError::MissingConfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::UpstreamFailure { status, .. } => *status,
            RelayError::HttpError(_) | RelayError::JsonError(_) | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Envelope the caller receives for this error
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            RelayError::InvalidMethod(_) => ErrorEnvelope::new(METHOD_NOT_ALLOWED_MESSAGE),
            RelayError::InvalidInput(_) => ErrorEnvelope::new(MISSING_PROMPT_MESSAGE),
            RelayError::MissingConfiguration(_) => {
                ErrorEnvelope::new(INCOMPLETE_CONFIGURATION_MESSAGE)
            }
            RelayError::UpstreamFailure { body, .. } => {
                ErrorEnvelope::new(UPSTREAM_FAILURE_MESSAGE).with_details(body.clone())
            }
            RelayError::HttpError(_) | RelayError::JsonError(_) | RelayError::Internal(_) => {
                ErrorEnvelope::new(INTERNAL_ERROR_MESSAGE)
            }
        }
    }

    /// Whether this error is a failure nothing anticipated explicitly
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            RelayError::HttpError(_) | RelayError::JsonError(_) | RelayError::Internal(_)
        )
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        OutboundResponse::from_error(&self).into_response()
    }
}

/// Result type alias for convenience
pub type RelayResult<T> = Result<T, RelayError>;
