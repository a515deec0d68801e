//! Authentication endpoint
//!
//! Validates a submitted password against the configured secret and returns
//! a plain boolean result. No session token is issued; each chat call is
//! independent of this check.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{error::AppError, AppState};

/// Authentication request body
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub password: Option<String>,
}

/// Authentication response body
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub authenticated: bool,
}

/// Handle authentication requests
///
/// Returns 200 `{authenticated: true}` on a matching credential, 400 when
/// the credential is missing and 401 on a mismatch. The mismatch response
/// never says which character differed or whether a secret is configured.
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let password = match request.password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(AppError::MissingCredential),
    };

    if state.gate.verify(password) {
        info!("Authentication succeeded");
        Ok(Json(AuthResponse {
            authenticated: true,
        }))
    } else {
        warn!("Authentication failed");
        Err(AppError::AuthenticationFailed)
    }
}
