//! Configuration management for the relay
//!
//! Configuration is loaded from environment variables. The upstream API key
//! is not part of it: it is read per invocation through [`crate::secrets`].

use anyhow::{Context, Result};
use std::env;

/// Default Gemini REST base URL
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model behind the generateContent endpoint
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";
/// Default route the relay handler is mounted on
pub const DEFAULT_RELAY_PATH: &str = "/.netlify/functions/gemini-proxy";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Route the relay handler is mounted on
    pub relay_path: String,

    /// Gemini API base URL
    pub gemini_api_url: String,
    /// Model used for generateContent
    pub gemini_model: String,

    /// Upstream request timeout in seconds (unset means no timeout)
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let relay_path =
            env::var("RELAY_PATH").unwrap_or_else(|_| DEFAULT_RELAY_PATH.to_string());
        if !relay_path.starts_with('/') {
            anyhow::bail!("RELAY_PATH must start with '/', got {relay_path:?}");
        }

        Ok(Self {
            host: env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("RELAY_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid RELAY_PORT")?,
            relay_path,

            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),

            upstream_timeout_secs: match env::var("UPSTREAM_TIMEOUT_SECS") {
                Ok(value) if !value.trim().is_empty() => Some(
                    value
                        .trim()
                        .parse()
                        .context("Invalid UPSTREAM_TIMEOUT_SECS")?,
                ),
                _ => None,
            },
        })
    }
}
