//! Access gate endpoint integration tests
//!
//! Tests for POST /auth: credential matching, the XHR header requirement
//! and the exact error bodies.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{constants, test_server};
use crate::mocks::MockProvider;

fn xhr_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("XMLHttpRequest"),
    )
}

async fn auth_server() -> (MockProvider, TestServer) {
    let provider = MockProvider::start().await;
    let server = test_server(&provider.uri());
    (provider, server)
}

#[tokio::test]
async fn test_correct_credential_authenticates() {
    let (_provider, server) = auth_server().await;
    let (name, value) = xhr_header();

    let response = server
        .post("/auth")
        .add_header(name, value)
        .json(&json!({"password": constants::TEST_PASSWORD}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({"authenticated": true}));
}

#[tokio::test]
async fn test_wrong_credential_is_rejected_generically() {
    let (_provider, server) = auth_server().await;
    let (name, value) = xhr_header();

    let response = server
        .post("/auth")
        .add_header(name, value)
        .json(&json!({"password": "wrong"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Authentication failed"}));
}

#[tokio::test]
async fn test_near_miss_credentials_are_rejected() {
    let (_provider, server) = auth_server().await;

    // Single character difference and length mismatch must behave exactly
    // like any other wrong credential.
    for candidate in ["secret124", "secret12", "secret1234", "Secret123"] {
        let (name, value) = xhr_header();
        let response = server
            .post("/auth")
            .add_header(name, value)
            .json(&json!({"password": candidate}))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Authentication failed"}));
    }
}

#[tokio::test]
async fn test_missing_header_yields_403_even_with_correct_credential() {
    let (_provider, server) = auth_server().await;

    let response = server
        .post("/auth")
        .json(&json!({"password": constants::TEST_PASSWORD}))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Forbidden"}));
}

#[tokio::test]
async fn test_wrong_header_value_yields_403() {
    let (_provider, server) = auth_server().await;

    let response = server
        .post("/auth")
        .add_header(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("fetch"),
        )
        .json(&json!({"password": constants::TEST_PASSWORD}))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_credential_yields_400() {
    let (_provider, server) = auth_server().await;
    let (name, value) = xhr_header();

    let response = server
        .post("/auth")
        .add_header(name, value)
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Password is required"}));
}

#[tokio::test]
async fn test_empty_credential_yields_400() {
    let (_provider, server) = auth_server().await;
    let (name, value) = xhr_header();

    let response = server
        .post("/auth")
        .add_header(name, value)
        .json(&json!({"password": ""}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Password is required"}));
}

#[tokio::test]
async fn test_non_post_yields_405() {
    let (_provider, server) = auth_server().await;
    let (name, value) = xhr_header();

    let response = server.get("/auth").add_header(name, value).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
