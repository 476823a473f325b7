//! Upstream Gateway Port - Interface to the third-party conversational API.
//!
//! The gateway performs exactly one HTTP attempt per call. It does not
//! interpret status codes: non-success responses come back as a normal
//! [`UpstreamResponse`] so the forwarder can relay them, and only transport
//! failures surface as [`GatewayError`].
//!
//! # Example
//!
//! ```ignore
//! let request = CompletionRequest::new("sonar")
//!     .with_message(MessageRole::System, "You are a fact-checking assistant.")
//!     .with_message(MessageRole::User, "Did company X buy company Y?");
//!
//! let response = gateway.post_completion(&serde_json::to_value(&request)?).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for the chat-completions endpoint of the external API.
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    /// POSTs a JSON body to the completions endpoint with the configured
    /// credential attached.
    async fn post_completion(
        &self,
        body: &serde_json::Value,
    ) -> Result<UpstreamResponse, GatewayError>;
}

/// Status and raw body of an upstream reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Transport-level failures talking to the external API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be read.
    #[error("failed to read upstream body: {0}")]
    Body(String),
}

impl GatewayError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

/// Request body in the chat-completions shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl CompletionRequest {
    /// Creates a request for the given model with no messages.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Adds a message to the conversation.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(CompletionMessage {
            role,
            content: content.into(),
        });
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// A message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// The part of a completion response this crate reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoiceMessage {
    #[serde(default)]
    pub content: String,
}

impl CompletionResponse {
    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_in_chat_completions_shape() {
        let request = CompletionRequest::new("sonar")
            .with_message(MessageRole::System, "sys")
            .with_message(MessageRole::User, "hi")
            .with_max_tokens(1024)
            .with_temperature(0.5);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "sonar",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "max_tokens": 1024,
                "temperature": 0.5
            })
        );
    }

    #[test]
    fn optional_parameters_are_omitted() {
        let value = serde_json::to_value(CompletionRequest::new("sonar")).unwrap();
        assert!(value.get("max_tokens").is_none());
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn response_reads_first_choice() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "id": "abc",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some("first"));
    }

    #[test]
    fn response_without_choices_has_no_content() {
        let response: CompletionResponse = serde_json::from_value(json!({"error": "x"})).unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn status_classification() {
        assert!(UpstreamResponse::new(200, "{}").is_success());
        assert!(UpstreamResponse::new(204, "").is_success());
        assert!(!UpstreamResponse::new(401, "").is_success());
        assert!(!UpstreamResponse::new(503, "").is_success());
    }
}
