//! OpenAI completion provider
//!
//! Relays a single user message to an OpenAI-compatible chat completions
//! endpoint and returns the first choice's text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    provider::CompletionProvider,
};

/// Fixed system instruction prepended to every request
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Fixed sampling parameters
const TEMPERATURE: f64 = 0.7;
const PRESENCE_PENALTY: f64 = 0.0;
const FREQUENCY_PENALTY: f64 = 0.0;

/// Chat message role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Chat message in the provider wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

/// Chat completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatMessage,
}

/// Chat completion response (only the fields the relay reads)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatCompletionChoice>,
}

/// Provider client for an OpenAI-compatible backend
pub struct OpenAIProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Option<Duration>,
}

impl OpenAIProvider {
    /// Create a new provider client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
            timeout: config.provider_timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Build the fixed two-turn request for one user message
    pub fn build_request(&self, user_content: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: user_content.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            presence_penalty: PRESENCE_PENALTY,
            frequency_penalty: FREQUENCY_PENALTY,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, user_content: &str) -> AppResult<String> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            error!("OPENAI_API_KEY is not configured");
            AppError::Upstream("OPENAI_API_KEY is not configured".to_string())
        })?;

        let url = format!("{}/chat/completions", self.base_url);
        let request = self.build_request(user_content);

        debug!(url = %url, model = %self.model, "Sending completion request to provider");

        let mut request_builder = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&request);

        if let Some(timeout) = self.timeout {
            request_builder = request_builder.timeout(timeout);
        }

        let response = request_builder.send().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to reach provider");
            e
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!(url = %url, status = %status, "Provider returned an error");
            return Err(AppError::Upstream(format!(
                "provider error {}: {}",
                status, text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                error!(url = %url, "Provider response contained no choices");
                AppError::Upstream("provider response contained no choices".to_string())
            })?;

        info!(reply_len = reply.len(), "Completion request succeeded");
        Ok(reply)
    }
}
