//! Proxy handler
//!
//! `handle` is the whole relay: one linear pass that ends in `rejected`,
//! `upstream_failed` or `succeeded`. It never retries and never panics on
//! caller or upstream input; every failure becomes an [`OutboundResponse`].

use std::sync::Arc;

use secrecy::SecretString;
use tracing::Instrument;

use crate::{
    error::{RelayError, RelayResult},
    proxy::{
        logging::{Outcome, RequestContext},
        GenerateContentRequest, GenerativeApi,
    },
    relay::{InboundRequest, OutboundResponse},
    secrets::SecretSource,
};

/// Relays prompts to the upstream API with a server-held key
#[derive(Clone)]
pub struct ProxyHandler {
    upstream: Arc<dyn GenerativeApi>,
    secrets: Arc<dyn SecretSource>,
}

impl ProxyHandler {
    pub fn new(upstream: Arc<dyn GenerativeApi>, secrets: Arc<dyn SecretSource>) -> Self {
        Self { upstream, secrets }
    }

    /// Handle one inbound request
    pub async fn handle(&self, request: InboundRequest) -> OutboundResponse {
        let (_, response) = self.dispatch(request).await;
        response
    }

    /// Handle one inbound request and report the state it ended in
    ///
    /// Anything that fails before the upstream call is `Rejected`, whatever
    /// the error kind; anything that fails after it is `UpstreamFailed`.
    pub async fn dispatch(&self, request: InboundRequest) -> (Outcome, OutboundResponse) {
        let ctx = RequestContext::new(self.upstream.name(), self.upstream.model());

        async {
            ctx.log_request_start(&request.method, request.body.len());

            let result = match self.prepare(&request) {
                Ok((api_key, payload)) => self
                    .forward(&ctx, &api_key, &payload)
                    .await
                    .map_err(|err| (Outcome::UpstreamFailed, err)),
                Err(err) => Err((Outcome::Rejected, err)),
            };

            let (outcome, response) = match result {
                Ok(response) => (Outcome::Succeeded, response),
                Err((outcome, err)) => {
                    ctx.log_failure(&err);
                    (outcome, OutboundResponse::from_error(&err))
                }
            };

            ctx.log_request_complete(outcome, response.status);
            (outcome, response)
        }
        .instrument(ctx.create_span())
        .await
    }

    /// Validate the request and build the upstream payload
    fn prepare(
        &self,
        request: &InboundRequest,
    ) -> RelayResult<(SecretString, GenerateContentRequest)> {
        request.ensure_post()?;
        let prompt = request.prompt()?;

        let api_key = self
            .secrets
            .api_key()
            .ok_or_else(|| RelayError::MissingConfiguration(self.secrets.name()))?;

        Ok((api_key, GenerateContentRequest::from_prompt(prompt)))
    }

    async fn forward(
        &self,
        ctx: &RequestContext,
        api_key: &SecretString,
        payload: &GenerateContentRequest,
    ) -> RelayResult<OutboundResponse> {
        ctx.log_upstream_request(payload.text_len());

        let reply = self.upstream.generate_content(api_key, payload).await?;
        ctx.log_upstream_response(reply.status, reply.body.len());

        if !reply.status.is_success() {
            return Err(RelayError::UpstreamFailure {
                status: reply.status,
                body: reply.body,
            });
        }

        OutboundResponse::passthrough(reply.body)
    }
}
