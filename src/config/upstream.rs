//! Upstream chat-completions API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::upstream::{PerplexityConfig, DEFAULT_BASE_URL};
use crate::application::handlers::fact_check::{
    FactCheckSettings, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
    DEFAULT_TEMPERATURE,
};

/// Upstream API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Bearer credential for the upstream API
    pub api_key: Secret<String>,

    /// Base URL; requests go to `{base_url}/chat/completions`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model requested by the fact-check pipeline
    #[serde(default = "default_model")]
    pub model: String,

    /// System prompt sent ahead of every fact-check query
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl UpstreamConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: default_base_url(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }

    /// Gateway settings for the HTTP adapter
    pub fn gateway_config(&self) -> PerplexityConfig {
        PerplexityConfig::new(self.api_key.expose_secret().as_str())
            .with_base_url(self.base_url.as_str())
    }

    /// Request parameters for the fact-check pipeline
    pub fn fact_check_settings(&self) -> FactCheckSettings {
        FactCheckSettings {
            model: self.model.clone(),
            system_prompt: self.system_prompt.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Validate upstream configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("UPSTREAM__API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if environment.is_production() && !self.base_url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("UPSTREAM__MODEL"));
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}
