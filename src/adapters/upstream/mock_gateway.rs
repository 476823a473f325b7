//! Mock Upstream Gateway for testing.
//!
//! Returns pre-configured responses in order and records every body it
//! receives, so tests can run without calling the real API.
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockUpstreamGateway::new()
//!     .with_completion("## Relationships Between Entities\n- **A** x **B**");
//!
//! let response = gateway.post_completion(&body).await?;
//! assert_eq!(gateway.call_count(), 1);
//! ```

use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GatewayError, UpstreamGateway, UpstreamResponse};

/// Configurable in-memory gateway.
#[derive(Debug, Clone, Default)]
pub struct MockUpstreamGateway {
    responses: Arc<Mutex<VecDeque<Result<UpstreamResponse, GatewayError>>>>,
    calls: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockUpstreamGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response.
    pub fn with_response(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(UpstreamResponse::new(status, body)));
        self
    }

    /// Queues a 200 response whose first choice carries `content`.
    pub fn with_completion(self, content: &str) -> Self {
        let body = json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
        });
        self.with_response(200, body.to_string())
    }

    /// Queues a transport failure.
    pub fn with_network_error(self, message: &str) -> Self {
        self.push(Err(GatewayError::network(message)));
        self
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }

    /// Bodies received so far.
    pub fn calls(&self) -> Vec<serde_json::Value> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn push(&self, response: Result<UpstreamResponse, GatewayError>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }
}

#[async_trait]
impl UpstreamGateway for MockUpstreamGateway {
    async fn post_completion(
        &self,
        body: &serde_json::Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(body.clone());
        }

        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| Err(GatewayError::network("No mock response configured")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_responses_in_order_and_records_calls() {
        let gateway = MockUpstreamGateway::new()
            .with_response(200, "{}")
            .with_network_error("down");

        let first = gateway.post_completion(&json!({"n": 1})).await;
        let second = gateway.post_completion(&json!({"n": 2})).await;
        let third = gateway.post_completion(&json!({"n": 3})).await;

        assert_eq!(first.unwrap().status, 200);
        assert_eq!(second, Err(GatewayError::network("down")));
        assert!(third.is_err());
        assert_eq!(gateway.call_count(), 3);
        assert_eq!(gateway.calls()[1], json!({"n": 2}));
    }

    #[tokio::test]
    async fn completion_helper_wraps_content() {
        let gateway = MockUpstreamGateway::new().with_completion("hello");
        let response = gateway.post_completion(&json!({})).await.unwrap();
        assert_eq!(response.json().unwrap()["choices"][0]["message"]["content"], "hello");
    }
}
