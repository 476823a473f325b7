//! ForwardRequestHandler - Relays a JSON body to the upstream completions
//! endpoint unchanged.

use std::sync::Arc;

use thiserror::Error;

use crate::ports::{UpstreamGateway, UpstreamResponse};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardError {
    /// The upstream could not be reached or its body could not be read.
    #[error("Proxy server error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("Upstream request failed (status {status})")]
    UpstreamStatus { status: u16, body: String },
}

pub struct ForwardRequestHandler {
    gateway: Arc<dyn UpstreamGateway>,
}

impl ForwardRequestHandler {
    pub fn new(gateway: Arc<dyn UpstreamGateway>) -> Self {
        Self { gateway }
    }

    /// Sends `body` once. Successful responses come back untouched.
    pub async fn handle(&self, body: serde_json::Value) -> Result<UpstreamResponse, ForwardError> {
        let response = self
            .gateway
            .post_completion(&body)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Forwarding to upstream failed");
                ForwardError::Transport(e.to_string())
            })?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "Upstream rejected forwarded request");
            return Err(ForwardError::UpstreamStatus {
                status: response.status,
                body: response.body,
            });
        }

        tracing::debug!(status = response.status, "Forwarded request");
        Ok(response)
    }
}
