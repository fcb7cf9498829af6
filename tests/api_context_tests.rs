//! Integration tests for the token refresh gate of `ApiContext`.
//!
//! These tests run against a local mock server and count how often the token
//! endpoint is hit, both for single calls and for many concurrent ones.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use shippinglabel::{ApiContext, AuthToken, BaseUrl, Client, ClientConfig, ClientId, ClientSecret, Error};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointing at the mock server
fn create_client(server: &MockServer) -> Arc<Client> {
    let config = ClientConfig::builder()
        .client_id(ClientId::new("id").unwrap())
        .client_secret(ClientSecret::new("secret").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Arc::new(Client::new(config).unwrap())
}

fn token_response(access_token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "accessToken": access_token,
        "expiresIn": 3600,
        "refreshToken": "ignored",
        "tokenType": "Bearer"
    }))
}

async fn mount_user(server: &MockServer, bearer: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", format!("Bearer {bearer}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(times)
        .mount(server)
        .await;
}

// === Single calls ===

#[tokio::test]
async fn test_expired_token_is_refreshed_once_before_the_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(body_string("grant_type=refresh_token&refresh_token=stored-refresh"))
        .respond_with(token_response("new"))
        .expect(1)
        .mount(&server)
        .await;
    mount_user(&server, "new", 1).await;
    mount_user(&server, "old", 0).await;

    let api = ApiContext::new(
        create_client(&server),
        AuthToken::new("old", "stored-refresh", 0),
    )
    .unwrap();

    let user = api.get_user().await.unwrap();
    assert_eq!(user.id, Some(1));

    let token = api.token().await;
    assert_eq!(token.access_token, "new");
    assert_eq!(token.refresh_token, "stored-refresh");
    assert!(!token.is_expired());
}

#[tokio::test]
async fn test_bare_refresh_token_is_refreshed_on_first_use_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(token_response("fresh"))
        .expect(1)
        .mount(&server)
        .await;
    mount_user(&server, "fresh", 3).await;

    let api = ApiContext::new(
        create_client(&server),
        AuthToken::from_refresh_token("stored-refresh"),
    )
    .unwrap();

    for _ in 0..3 {
        api.get_user().await.unwrap();
    }
}

#[tokio::test]
async fn test_refresh_failure_is_returned_and_no_request_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "refresh token revoked",
            "code": "INVALID_GRANT"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let api = ApiContext::new(create_client(&server), AuthToken::from_refresh_token("revoked"))
        .unwrap();

    let error = api.get_user().await.unwrap_err();
    let api_error = error.as_api_error().expect("expected an API error");
    assert_eq!(api_error.code.as_deref(), Some("INVALID_GRANT"));
    assert_eq!(api_error.message.as_deref(), Some("refresh token revoked"));
}

#[tokio::test]
async fn test_api_error_body_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/addresses/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "not found",
            "code": "NOT_FOUND"
        })))
        .mount(&server)
        .await;

    let api = ApiContext::new(create_client(&server), AuthToken::new("valid", "r", 3600)).unwrap();

    match api.get_address(999).await {
        Err(Error::Api(error)) => {
            assert_eq!(error.message.as_deref(), Some("not found"));
            assert_eq!(error.code.as_deref(), Some("NOT_FOUND"));
            assert!(error.messages.is_empty());
            assert!(error.detail.is_none());
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

// === Concurrent calls ===

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_with_valid_token_never_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(token_response("unused"))
        .expect(0)
        .mount(&server)
        .await;
    mount_user(&server, "valid", 16).await;

    let api = Arc::new(
        ApiContext::new(create_client(&server), AuthToken::new("valid", "r", 3600)).unwrap(),
    );

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let api = Arc::clone(&api);
            tokio::spawn(async move { api.get_user().await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_with_expired_token_refresh_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(token_response("new").set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&server)
        .await;
    mount_user(&server, "new", 16).await;
    mount_user(&server, "old", 0).await;

    let api = Arc::new(
        ApiContext::new(create_client(&server), AuthToken::new("old", "r", 0)).unwrap(),
    );

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let api = Arc::clone(&api);
            tokio::spawn(async move { api.get_user().await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(api.token().await.access_token, "new");
}

#[tokio::test]
async fn test_cancelled_refresh_leaves_token_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(token_response("late").set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let api = ApiContext::new(create_client(&server), AuthToken::new("old", "r", 0)).unwrap();

    let result = tokio::time::timeout(Duration::from_millis(100), api.get_user()).await;
    assert!(result.is_err(), "call should have been cancelled");

    let token = api.token().await;
    assert_eq!(token.access_token, "old");
    assert!(token.is_expired());
}
