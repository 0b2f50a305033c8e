//! Header utilities for upstream requests
//!
//! Client headers are never forwarded upstream. The relay sends a fixed,
//! minimal header set and authenticates with the key query parameter.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

/// Build default headers for Gemini requests
pub fn build_default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    headers
}
