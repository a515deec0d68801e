//! Configuration management for Parley
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Shared secret checked by the access gate
    pub auth_password: String,

    /// OpenAI-compatible API base URL
    pub openai_api_url: String,
    /// OpenAI API key; absence makes chat calls fail at the provider boundary
    pub openai_api_key: Option<String>,
    /// Model identifier sent with every completion request
    pub model: String,

    /// Per-request timeout for the outbound provider call (in seconds).
    /// Unset means the call blocks until the provider responds or errors.
    pub provider_timeout_seconds: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("PARLEY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PARLEY_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid PARLEY_PORT")?,

            auth_password: env::var("AUTH_PASSWORD")
                .context("AUTH_PASSWORD must be set")?,

            openai_api_url: env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            model: env::var("PARLEY_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),

            provider_timeout_seconds: match env::var("PROVIDER_TIMEOUT_SECONDS") {
                Ok(v) => Some(v.parse().context("Invalid PROVIDER_TIMEOUT_SECONDS")?),
                Err(_) => None,
            },
        })
    }
}
