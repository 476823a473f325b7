//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Upstream base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Upstream base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("max_tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("temperature must be between 0 and 2")]
    InvalidTemperature,

    #[error("Reply delay minimum exceeds maximum")]
    InvalidReplyDelay,
}
