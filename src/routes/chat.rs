//! Chat endpoint
//!
//! Relays one user message to the completion provider and returns the
//! assistant reply. One shot, no retry, no streaming.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{error::AppError, provider::CompletionProvider, AppState};

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Handle chat requests
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let start_time = Instant::now();

    info!(
        provider = state.provider.name(),
        message_len = request.message.len(),
        "Processing chat request"
    );

    let reply = state
        .provider
        .complete(&request.message)
        .await
        .map_err(|e| {
            // The client sees a generic failure; the cause stays here.
            error!(error = %e, "Completion request failed");
            e
        })?;

    info!(
        duration_ms = %format!("{:.2}", start_time.elapsed().as_secs_f64() * 1000.0),
        "Chat request completed"
    );

    Ok(Json(ChatResponse { message: reply }))
}
