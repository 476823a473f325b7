//! Perplexity Gateway - reqwest implementation of the UpstreamGateway port.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PerplexityConfig::new(api_key)
//!     .with_base_url("https://api.perplexity.ai");
//!
//! let gateway = PerplexityGateway::new(config)?;
//! ```
//!
//! One attempt per call, no client timeout. The bearer credential is held
//! in a `Secret` and only exposed when building the request header.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::ports::{GatewayError, UpstreamGateway, UpstreamResponse};

/// Default API root for the Perplexity chat-completions API.
pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

/// Configuration for the Perplexity gateway.
#[derive(Debug, Clone)]
pub struct PerplexityConfig {
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.perplexity.ai).
    pub base_url: String,
}

impl PerplexityConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// HTTP gateway to the Perplexity API.
pub struct PerplexityGateway {
    config: PerplexityConfig,
    client: Client,
}

impl PerplexityGateway {
    /// Creates a gateway with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Network` if the HTTP client cannot be built.
    pub fn new(config: PerplexityConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl UpstreamGateway for PerplexityGateway {
    async fn post_completion(
        &self,
        body: &serde_json::Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        let url = self.completions_url();
        tracing::debug!(%url, "Forwarding completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GatewayError::network(format!("Connection failed: {}", e))
                } else {
                    GatewayError::network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Body(e.to_string()))?;

        tracing::debug!(status, bytes = text.len(), "Upstream responded");
        Ok(UpstreamResponse::new(status, text))
    }
}
