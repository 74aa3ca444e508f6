//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and authorization handling.


use serde_json::{json, Value};

use test_utils::{strategy_fixture, InMemoryStore, TestApiServer, TEST_TOKEN, TEST_USER};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["database_connected"], false);
    assert_eq!(body["service"], "signalcraft-analysis-engine");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;

    // Generate at least one request before scraping.
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn analyze_without_credential_is_unauthorized() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/strategies/1/analyze")
        .json(&json!({ "news": [] }))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn analyze_with_invalid_credential_is_unauthorized() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/strategies/1/analyze")
        .add_header("Authorization", "Bearer wrong-token")
        .json(&json!({ "news": [] }))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn analyze_without_database_reports_unavailable() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/strategies/1/analyze")
        .add_header("Authorization", format!("Bearer {}", TEST_TOKEN))
        .json(&json!({ "news": ["strong rally"], "seed": 7 }))
        .await;
    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn feedback_without_database_reports_unavailable() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/feedback").await;
    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn analyze_unknown_strategy_is_not_found() {
    let store = InMemoryStore::new(vec![strategy_fixture(1, TEST_USER, "BTC", true)]);
    let app = TestApiServer::with_store(store).await;

    let response = app
        .server
        .post("/api/strategies/99/analyze")
        .add_header("Authorization", format!("Bearer {}", TEST_TOKEN))
        .json(&json!({ "news": [], "seed": 1 }))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn analyze_strategy_of_another_user_is_not_found() {
    let store = InMemoryStore::new(vec![strategy_fixture(1, "someone-else", "BTC", true)]);
    let app = TestApiServer::with_store(store).await;

    let response = app
        .server
        .post("/api/strategies/1/analyze")
        .add_header("Authorization", format!("Bearer {}", TEST_TOKEN))
        .json(&json!({ "news": [], "seed": 1 }))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn analyze_inactive_strategy_conflicts() {
    let store = InMemoryStore::new(vec![strategy_fixture(1, TEST_USER, "BTC", false)]);
    let app = TestApiServer::with_store(store).await;

    let response = app
        .server
        .post("/api/strategies/1/analyze")
        .add_header("Authorization", format!("Bearer {}", TEST_TOKEN))
        .json(&json!({ "news": [], "seed": 1 }))
        .await;
    assert_eq!(response.status_code(), 409);
}

#[tokio::test]
async fn analyze_returns_signal_and_persists_feedback() {
    let store = InMemoryStore::new(vec![strategy_fixture(1, TEST_USER, "BTC", true)]);
    let app = TestApiServer::with_store(store).await;

    let response = app
        .server
        .post("/api/strategies/1/analyze")
        .add_header("Authorization", format!("Bearer {}", TEST_TOKEN))
        .json(&json!({ "news": ["strong bullish rally"], "seed": 42 }))
        .await;
    assert_eq!(response.status_code(), 200);

    let signal: Value = response.json();
    assert_eq!(signal["symbol"], "BTC");
    let action = signal["action"].as_str().unwrap();
    assert!(["BUY", "SELL", "HOLD"].contains(&action));
    let confidence = signal["confidence"].as_f64().unwrap();
    assert!((0.0..=0.95).contains(&confidence));
    assert!(signal["rationale"].as_str().unwrap().contains("risk level"));

    let feedback: Value = app.server.get("/api/feedback").await.json();
    let records = feedback.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["symbol"], "BTC");
    assert_eq!(records[0]["strategy_id"], 1);
    assert_eq!(records[0]["user_id"], TEST_USER);
    assert_eq!(records[0]["action"], signal["action"]);
}

#[tokio::test]
async fn feedback_filters_by_symbol_and_honors_limit() {
    let store = InMemoryStore::new(vec![
        strategy_fixture(1, TEST_USER, "BTC", true),
        strategy_fixture(2, TEST_USER, "ETH", true),
    ]);
    let app = TestApiServer::with_store(store).await;

    for id in [1, 2] {
        let response = app
            .server
            .post(&format!("/api/strategies/{}/analyze", id))
            .add_header("Authorization", format!("Bearer {}", TEST_TOKEN))
            .json(&json!({ "news": [], "seed": 5 }))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let filtered: Value = app.server.get("/api/feedback?symbol=ETH").await.json();
    let records = filtered.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["symbol"], "ETH");

    let limited: Value = app.server.get("/api/feedback?limit=1").await.json();
    assert_eq!(limited.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn api_server_is_stateless() {
    let app = TestApiServer::new().await;

    let response1 = app.server.get("/health").await;
    let response2 = app.server.get("/health").await;

    assert_eq!(response1.status_code(), 200);
    assert_eq!(response2.status_code(), 200);

    let body1: Value = response1.json();
    let body2: Value = response2.json();

    assert_eq!(body1["status"], "healthy");
    assert_eq!(body2["status"], "healthy");
}
