//! Health endpoint integration tests

use serde_json::Value;

use crate::common::test_server;
use crate::mocks::MockProvider;

#[tokio::test]
async fn test_health_endpoint_returns_proper_structure() {
    let provider = MockProvider::start().await;
    let server = test_server(&provider.uri());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("uptime_seconds").is_some(), "Response should have 'uptime_seconds' field");
    assert!(json.get("timestamp").is_some(), "Response should have 'timestamp' field");
}
