//! Mock OpenAI-compatible provider for testing
//!
//! Wiremock mocks for `POST /chat/completions`, covering success and
//! failure scenarios.

#![allow(dead_code)]

use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::TEST_OPENAI_API_KEY;

/// Mock provider server wrapper
pub struct MockProvider {
    server: MockServer,
}

impl MockProvider {
    /// Start a new mock provider server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock provider
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful completion with the given reply text.
    ///
    /// The mock also asserts the outbound request shape: bearer auth, the
    /// fixed sampling parameters and the two-turn prompt ending in the
    /// given user content.
    pub async fn mock_completion_success(&self, user_content: &str, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header(
                "Authorization",
                format!("Bearer {}", TEST_OPENAI_API_KEY).as_str(),
            ))
            .and(body_partial_json(json!({
                "model": "gpt-4",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": user_content}
                ],
                "temperature": 0.7,
                "presence_penalty": 0.0,
                "frequency_penalty": 0.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
            .mount(&self.server)
            .await;
    }

    /// Mock a provider-side failure (HTTP 500 with an error body)
    pub async fn mock_completion_failure(&self) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": {
                    "message": "The server had an error processing your request.",
                    "type": "server_error"
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a malformed provider response (no choices)
    pub async fn mock_completion_empty_choices(&self) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-empty",
                "object": "chat.completion",
                "created": 1706745600,
                "model": "gpt-4",
                "choices": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of completion requests the mock has received
    pub async fn received_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

/// Build a full completion response body around the given reply text
fn completion_body(reply: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1706745600,
        "model": "gpt-4",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": reply},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 8, "total_tokens": 18}
    })
}
