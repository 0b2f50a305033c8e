//! Gemini Relay - credential-hiding proxy for the Gemini generateContent API
//!
//! This library provides the core functionality for the relay server.
//! Clients post a prompt; the relay adds the server-held API key, makes a
//! single upstream call and returns the upstream JSON or an error envelope.

pub mod config;
pub mod error;
pub mod proxy;
pub mod relay;
pub mod routes;
pub mod secrets;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{RelayError, RelayResult};
pub use crate::proxy::{GeminiClient, GenerativeApi};
pub use crate::relay::ProxyHandler;
pub use crate::secrets::{EnvSecret, SecretSource, StaticSecret};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Upstream generative-text API
    pub upstream: Arc<dyn GenerativeApi>,
    /// Source of the upstream API key, consulted per invocation
    pub secrets: Arc<dyn SecretSource>,
    /// The relay handler wired to `upstream` and `secrets`
    pub relay: ProxyHandler,
}

impl AppState {
    /// Create a new application state reading the key from the environment
    pub fn new(config: Config) -> Result<Self> {
        // No timeout unless one is configured explicitly
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(32);
        if let Some(secs) = config.upstream_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        Ok(Self::with_secrets(
            config,
            http_client,
            Arc::new(EnvSecret::default()),
        ))
    }

    /// Create an application state with an explicit key source
    ///
    /// Used by tests to point the relay at a mock upstream without touching
    /// the process environment.
    pub fn with_secrets(
        config: Config,
        http_client: reqwest::Client,
        secrets: Arc<dyn SecretSource>,
    ) -> Self {
        let upstream: Arc<dyn GenerativeApi> = Arc::new(GeminiClient::new(http_client, &config));
        let relay = ProxyHandler::new(upstream.clone(), secrets.clone());

        Self {
            config,
            start_time: Instant::now(),
            upstream,
            secrets,
            relay,
        }
    }
}
