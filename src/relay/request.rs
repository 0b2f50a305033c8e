//! Inbound request model and prompt extraction

use axum::http::Method;
use bytes::Bytes;
use serde_json::Value;

use crate::error::{RelayError, RelayResult};

/// What the relay reads from the caller: the method and the raw body
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    pub body: Bytes,
}

impl InboundRequest {
    pub fn new(method: Method, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            body: body.into(),
        }
    }

    /// Fails with `InvalidMethod` for anything but POST
    pub fn ensure_post(&self) -> RelayResult<()> {
        if self.method == Method::POST {
            Ok(())
        } else {
            Err(RelayError::InvalidMethod(self.method.clone()))
        }
    }

    /// Extract the `prompt` field from the JSON body
    ///
    /// A body that is not JSON at all is a `JsonError`, which surfaces as an
    /// internal error. Valid JSON without a non-empty string `prompt` is
    /// `InvalidInput`.
    pub fn prompt(&self) -> RelayResult<String> {
        let value: Value = serde_json::from_slice(&self.body)?;

        match value.get("prompt") {
            Some(Value::String(prompt)) if !prompt.is_empty() => Ok(prompt.clone()),
            Some(Value::String(_)) => Err(RelayError::InvalidInput("prompt is empty".to_string())),
            Some(_) => Err(RelayError::InvalidInput("prompt is not a string".to_string())),
            None => Err(RelayError::InvalidInput("prompt is missing".to_string())),
        }
    }
}
