//! Conversation session state machine
//!
//! Client-side driver for one chat session, decoupled from any rendering
//! concern. A session starts `Locked`, unlocks once through the access
//! gate, then alternates between `Idle` and `AwaitingReply` as messages are
//! exchanged. The transcript is an append-only in-memory list; nothing is
//! persisted across sessions.

pub mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transcript message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry, immutable once appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Session lifecycle states.
///
/// `Unlocking` and `AwaitingReply` are held only while the corresponding
/// backend call is in flight. Both transitions run inside `&mut self`
/// methods, so a second submission cannot be issued until the prior one
/// resolves or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Locked,
    Unlocking,
    Idle,
    AwaitingReply,
}

/// Transport-level failure reported by a backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server error: {0}")]
    Server(String),
}

/// Errors surfaced to the user, as short generic text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Authentication failed. Please try again.")]
    AuthenticationFailed,

    #[error("An error occurred. Please try again.")]
    AuthUnavailable,

    #[error("Failed to get response. Please try again.")]
    ExchangeFailed,

    #[error("session is locked")]
    Locked,
}

/// Backend a conversation talks through: one call to unlock, one call per
/// message exchanged
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Check a credential against the access gate.
    ///
    /// `Ok(false)` means the gate rejected the credential; `Err` means the
    /// gate could not be reached at all.
    async fn authenticate(&self, password: &str) -> Result<bool, BackendError>;

    /// Exchange one user message for one assistant reply
    async fn complete(&self, message: &str) -> Result<String, BackendError>;
}

/// One chat session: credential gate, then message exchange
pub struct Conversation<B: ChatBackend> {
    backend: B,
    transcript: Vec<Message>,
    state: SessionState,
}

impl<B: ChatBackend> Conversation<B> {
    /// Create a locked session over the given backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            transcript: Vec::new(),
            state: SessionState::Locked,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Messages exchanged so far, in submission order
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Whether the credential gate has been passed
    pub fn is_unlocked(&self) -> bool {
        matches!(self.state, SessionState::Idle | SessionState::AwaitingReply)
    }

    /// Submit a credential to the access gate.
    ///
    /// On success the session is unlocked for its remaining lifetime. On
    /// rejection or gate failure it stays locked and may be retried.
    pub async fn unlock(&mut self, credential: &str) -> Result<(), SessionError> {
        if self.is_unlocked() {
            return Ok(());
        }

        self.state = SessionState::Unlocking;
        match self.backend.authenticate(credential).await {
            Ok(true) => {
                self.state = SessionState::Idle;
                Ok(())
            }
            Ok(false) => {
                self.state = SessionState::Locked;
                Err(SessionError::AuthenticationFailed)
            }
            Err(_) => {
                self.state = SessionState::Locked;
                Err(SessionError::AuthUnavailable)
            }
        }
    }

    /// Submit one message and wait for the reply.
    ///
    /// Returns the assistant message on success, or `None` for an empty or
    /// whitespace-only submission, which changes nothing. On exchange
    /// failure the user message stays in the transcript unanswered and the
    /// session returns to `Idle`; no placeholder is appended.
    pub async fn send(&mut self, input: &str) -> Result<Option<&Message>, SessionError> {
        if !self.is_unlocked() {
            return Err(SessionError::Locked);
        }
        if input.trim().is_empty() {
            return Ok(None);
        }

        self.transcript.push(Message {
            role: Role::User,
            content: input.to_string(),
        });
        self.state = SessionState::AwaitingReply;

        match self.backend.complete(input).await {
            Ok(reply) => {
                self.transcript.push(Message {
                    role: Role::Assistant,
                    content: reply,
                });
                self.state = SessionState::Idle;
                Ok(self.transcript.last())
            }
            Err(_) => {
                self.state = SessionState::Idle;
                Err(SessionError::ExchangeFailed)
            }
        }
    }
}
