//! Gemini API client
//!
//! Sends generateContent requests to Google's Generative Language API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::{
    config::Config,
    error::RelayResult,
    proxy::{
        headers::build_default_headers,
        provider::{GenerativeApi, UpstreamReply},
        types::GenerateContentRequest,
    },
};

/// Gemini generateContent client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
        }
    }

    /// Endpoint URL without the key parameter
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeApi for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(
        &self,
        api_key: &SecretString,
        payload: &GenerateContentRequest,
    ) -> RelayResult<UpstreamReply> {
        let endpoint = self.endpoint();

        debug!(
            endpoint = %endpoint,
            model = %self.model,
            text_len = payload.text_len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", api_key.expose_secret().as_str())])
            .headers(build_default_headers())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(
            endpoint = %endpoint,
            status = %status,
            body_len = body.len(),
            "Received generateContent response"
        );

        Ok(UpstreamReply { status, body })
    }
}
