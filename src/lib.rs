//! Parley - password-gated web chat relay
//!
//! This library provides the core functionality for the Parley chat server.
//! It gates access behind a shared secret and relays single messages to an
//! OpenAI-compatible completion endpoint.

pub mod config;
pub mod error;
pub mod gate;
pub mod middleware;
pub mod provider;
pub mod routes;
pub mod session;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::gate::AccessGate;
pub use crate::provider::{CompletionProvider, OpenAIProvider};
pub use crate::session::{Conversation, HttpBackend, Message, Role};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Shared-secret gate for the /auth endpoint
    pub gate: AccessGate,
    /// Completion provider for relaying /chat messages to the LLM backend
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // No global client timeout: outbound calls block until the provider
        // responds unless PROVIDER_TIMEOUT_SECONDS is set, which is applied
        // per request by the provider.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()?;

        let gate = AccessGate::new(&config.auth_password);

        let provider: Arc<dyn CompletionProvider> =
            Arc::new(OpenAIProvider::new(http_client, &config));

        Ok(Self {
            config,
            start_time: Instant::now(),
            gate,
            provider,
        })
    }
}
