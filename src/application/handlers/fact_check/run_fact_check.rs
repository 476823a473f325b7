//! FactCheckHandler - Sends a claim to the upstream model and extracts
//! relationships and the final estimation from the reply.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::domain::extraction::{extract, ExtractionResult, GraphData};
use crate::ports::{CompletionRequest, CompletionResponse, MessageRole, UpstreamGateway};

pub const DEFAULT_MODEL: &str = "sonar";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a fact-checking and information extraction assistant.";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Request parameters sent with every fact-check.
#[derive(Debug, Clone, PartialEq)]
pub struct FactCheckSettings {
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for FactCheckSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FactCheckCommand {
    pub query: String,
}

/// Outcome of one fact-check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckReport {
    pub query: String,
    pub reply: String,
    pub extraction: ExtractionResult,
    pub graph: GraphData,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactCheckError {
    #[error("{0}")]
    Validation(String),

    #[error("Network error: Could not reach the fact-checking server.")]
    Unreachable,

    #[error("Fact-checking service failed (status {status}). Please try again later.")]
    UpstreamStatus { status: u16 },
}

pub struct FactCheckHandler {
    gateway: Arc<dyn UpstreamGateway>,
    settings: FactCheckSettings,
}

impl FactCheckHandler {
    pub fn new(gateway: Arc<dyn UpstreamGateway>, settings: FactCheckSettings) -> Self {
        Self { gateway, settings }
    }

    pub async fn handle(&self, cmd: FactCheckCommand) -> Result<FactCheckReport, FactCheckError> {
        let query = cmd.query.trim();
        if query.is_empty() {
            return Err(FactCheckError::Validation(
                "Query cannot be empty".to_string(),
            ));
        }

        let request = self.build_request(query);
        let body = serde_json::to_value(&request)
            .map_err(|e| FactCheckError::Validation(format!("Invalid request: {}", e)))?;

        let response = self.gateway.post_completion(&body).await.map_err(|e| {
            tracing::warn!(error = %e, "Fact-check upstream unreachable");
            FactCheckError::Unreachable
        })?;

        if !response.is_success() {
            tracing::error!(
                status = response.status,
                body = %response.body,
                "Fact-check upstream returned an error"
            );
            return Err(FactCheckError::UpstreamStatus {
                status: response.status,
            });
        }

        let reply = reply_text(&response.body);
        let extraction = extract(&reply);
        let graph = GraphData::from_triples(&extraction.relationships);

        tracing::info!(
            relationships = extraction.relationships.len(),
            has_summary = extraction.summary.is_some(),
            "Fact-check completed"
        );

        Ok(FactCheckReport {
            query: query.to_string(),
            reply,
            extraction,
            graph,
        })
    }

    fn build_request(&self, query: &str) -> CompletionRequest {
        CompletionRequest::new(&self.settings.model)
            .with_message(MessageRole::System, &self.settings.system_prompt)
            .with_message(MessageRole::User, query)
            .with_max_tokens(self.settings.max_tokens)
            .with_temperature(self.settings.temperature)
    }
}

/// First choice's content, or the body itself when there is none.
fn reply_text(body: &str) -> String {
    let content = serde_json::from_str::<CompletionResponse>(body)
        .ok()
        .and_then(|parsed| parsed.first_content().map(str::to_string))
        .filter(|content| !content.is_empty());

    match content {
        Some(content) => content,
        None => match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value.to_string(),
            Err(_) => body.to_string(),
        },
    }
}
