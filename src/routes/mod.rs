//! HTTP routes for Parley
//!
//! This module defines all HTTP endpoints exposed by the server.

pub mod auth;
pub mod chat;
pub mod health;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware::xhr::require_xhr, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // The XHR guard applies to /auth only; /chat carries no such marker.
    let auth_routes = Router::new()
        .route("/auth", post(auth::authenticate))
        .layer(middleware::from_fn(require_xhr));

    Router::new()
        .merge(auth_routes)
        .route("/chat", post(chat::chat))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
