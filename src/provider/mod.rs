//! Completion provider abstraction
//!
//! Defines the trait interface for completion providers to keep the HTTP
//! layer decoupled from any specific LLM backend.

pub mod openai;

pub use openai::OpenAIProvider;

use async_trait::async_trait;

use crate::error::AppResult;

/// Trait defining the interface for completion providers
///
/// Implementations handle one-shot communication with a specific backend.
/// Each call is stateless from the provider's perspective: only the current
/// user message is sent, never the prior transcript.
///
/// # Security
///
/// Implementations MUST use the provider API key from configuration and
/// never forward anything from the client request besides the message text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Produce one assistant reply for one user message.
    ///
    /// A single synchronous call with no retry; any transport or provider
    /// failure surfaces as an error.
    async fn complete(&self, user_content: &str) -> AppResult<String>;
}
