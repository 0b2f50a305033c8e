//! Outbound response model

use axum::{
    body::Body,
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use serde::de::IgnoredAny;

use crate::error::{RelayError, RelayResult};

/// Fallback body if an error envelope could not be serialized
const INTERNAL_ERROR_BODY: &str = r#"{"error":"Ocorreu um erro interno no servidor."}"#;

/// Terminal output of one relay invocation
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl OutboundResponse {
    /// 200 carrying the upstream JSON exactly as it was received
    ///
    /// The body is only checked to be JSON; the original text is forwarded
    /// untouched, surrounding whitespace included.
    pub fn passthrough(upstream: String) -> RelayResult<Self> {
        serde_json::from_str::<IgnoredAny>(&upstream)?;
        Ok(Self::json(StatusCode::OK, upstream))
    }

    /// Error envelope for a failed invocation
    pub fn from_error(err: &RelayError) -> Self {
        let body = serde_json::to_string(&err.envelope())
            .unwrap_or_else(|_| INTERNAL_ERROR_BODY.to_string());
        Self::json(err.status(), body)
    }

    // Every relay response is JSON and readable cross-origin.
    fn json(status: StatusCode, body: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

        Self {
            status,
            headers,
            body,
        }
    }
}

impl IntoResponse for OutboundResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, Body::from(self.body)).into_response()
    }
}
