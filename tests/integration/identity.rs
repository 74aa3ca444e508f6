//! Integration tests for the HTTP identity provider client

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use signalcraft::services::{HttpIdentityProvider, IdentityError, IdentityProvider};

#[tokio::test]
async fn resolves_user_id_from_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("Authorization", "Bearer good-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-123",
            "email": "trader@example.com"
        })))
        .mount(&mock_server)
        .await;

    let provider = HttpIdentityProvider::new(mock_server.uri());
    let user_id = provider.resolve("good-token").await.expect("resolve");
    assert_eq!(user_id, "user-123");
}

#[tokio::test]
async fn rejected_token_is_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid JWT"
        })))
        .mount(&mock_server)
        .await;

    let provider = HttpIdentityProvider::new(mock_server.uri());
    let result = provider.resolve("bad-token").await;
    assert!(matches!(result, Err(IdentityError::Unauthorized)));
}

#[tokio::test]
async fn upstream_failure_is_not_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = HttpIdentityProvider::new(mock_server.uri());
    let result = provider.resolve("any-token").await;
    assert!(matches!(result, Err(IdentityError::Malformed)));
}

#[tokio::test]
async fn missing_id_field_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "trader@example.com"
        })))
        .mount(&mock_server)
        .await;

    let provider = HttpIdentityProvider::new(mock_server.uri());
    let result = provider.resolve("good-token").await;
    assert!(matches!(result, Err(IdentityError::Malformed)));
}
