//! HTTP backend for the conversation session
//!
//! Talks to a running Parley server over its public surface: `POST /auth`
//! with the XHR marker header, then `POST /chat` per message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::middleware::xhr::{XHR_HEADER, XHR_VALUE};
use crate::session::{BackendError, ChatBackend};

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    authenticated: bool,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: String,
}

/// Chat backend over HTTP
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for the server at `base_url` (no trailing slash)
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn authenticate(&self, password: &str) -> Result<bool, BackendError> {
        let url = format!("{}/auth", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(XHR_HEADER, XHR_VALUE)
            .json(&AuthRequest { password })
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        debug!(url = %url, status = %response.status(), "Auth response received");

        // Any rejection (400/401/403) reads as a failed credential check;
        // only an unreachable server is a backend error.
        if !response.status().is_success() {
            return Ok(false);
        }

        let body: AuthResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Ok(body.authenticated)
    }

    async fn complete(&self, message: &str) -> Result<String, BackendError> {
        let url = format!("{}/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        debug!(url = %url, status = %response.status(), "Chat response received");

        if !response.status().is_success() {
            return Err(BackendError::Server(response.status().to_string()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Ok(body.message)
    }
}
