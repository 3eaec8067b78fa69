use super::*;
use crate::credentials::{CredentialProvider, TokenStore};
use crate::net::interceptor::{AUTHORIZATION_HEADER, CSRF_HEADER};
use crate::net::request::{ApiResponse, Method};
use crate::net::test_helpers::mock_client;
use serde_json::json;

fn service() -> (
    AuthService,
    std::sync::Arc<crate::net::test_helpers::MockTransport>,
    std::sync::Arc<crate::credentials::MemoryCredentials>,
) {
    let (client, transport, creds) = mock_client();
    (AuthService::new(client), transport, creds)
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_stores_token_and_returns_full_body() {
    let (auth, transport, creds) = service();
    transport.respond_json(200, &json!({ "message": "ok", "token": "abc123", "role": "admin" }));

    let body = auth.login("alice", "pw").await.unwrap();

    assert_eq!(body, json!({ "message": "ok", "token": "abc123", "role": "admin" }));
    assert_eq!(creds.token().as_deref(), Some("abc123"));
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn login_posts_credentials_as_json() {
    let (auth, transport, _) = service();
    transport.respond_json(200, &json!({ "message": "ok", "token": "t", "role": "r" }));

    auth.login("alice", "pw").await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "http://localhost:8000/api/auth/login/");
    assert_eq!(sent[0].body, Some(json!({ "username": "alice", "password": "pw" })));
    assert!(sent[0].with_credentials);
}

#[tokio::test]
async fn login_with_empty_token_does_not_store() {
    let (auth, transport, creds) = service();
    transport.respond_json(200, &json!({ "message": "ok", "token": "", "role": "admin" }));

    let body = auth.login("alice", "pw").await.unwrap();

    assert_eq!(body["token"], "");
    assert_eq!(creds.token(), None);
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn login_with_null_message_still_stores_token() {
    let (auth, transport, creds) = service();
    let issued = json!({ "message": null, "token": "abc", "role": "admin" });
    transport.respond_json(200, &issued);

    let body = auth.login("alice", "pw").await.unwrap();

    assert_eq!(body, issued);
    assert_eq!(creds.token().as_deref(), Some("abc"));
}

#[tokio::test]
async fn login_returns_unexpected_fields_untouched() {
    let (auth, transport, creds) = service();
    let issued = json!({ "token": "abc", "role": null, "permissions": ["read"] });
    transport.respond_json(200, &issued);

    assert_eq!(auth.login("alice", "pw").await.unwrap(), issued);
    assert_eq!(creds.token().as_deref(), Some("abc"));
}

#[tokio::test]
async fn login_non_json_success_body_is_decode_error() {
    let (auth, transport, creds) = service();
    transport.respond(Ok(ApiResponse::new(200, "<html>")));

    let err = auth.login("alice", "pw").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(creds.token(), None);
}

#[tokio::test]
async fn login_without_token_keeps_previous_token() {
    let (auth, transport, creds) = service();
    creds.store_token("old");
    transport.respond_json(200, &json!({ "message": "ok" }));

    auth.login("alice", "pw").await.unwrap();

    assert_eq!(creds.token().as_deref(), Some("old"));
}

#[tokio::test]
async fn login_failure_propagates_and_leaves_storage() {
    let (auth, transport, creds) = service();
    transport.respond_json(400, &json!({ "error": "Invalid credentials" }));

    let err = auth.login("alice", "bad").await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(creds.token(), None);
}

#[tokio::test]
async fn login_sends_csrf_cookie() {
    let (auth, transport, creds) = service();
    creds.set_cookies("csrftoken=pre");
    transport.respond_json(200, &json!({ "message": "ok", "token": "t", "role": "r" }));

    auth.login("alice", "pw").await.unwrap();

    assert_eq!(transport.sent()[0].header(CSRF_HEADER), Some("pre"));
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn logout_success_removes_token() {
    let (auth, transport, creds) = service();
    creds.store_token("abc123");
    creds.set_cookies("csrftoken=c");
    transport.respond_json(200, &json!({ "message": "Logout successful" }));

    auth.logout().await.unwrap();

    assert_eq!(creds.token(), None);
    let sent = transport.sent();
    assert_eq!(sent[0].url, "http://localhost:8000/api/auth/logout/");
    assert_eq!(sent[0].method, Method::Post);
    assert!(sent[0].body.is_none());
    assert_eq!(sent[0].header(AUTHORIZATION_HEADER), Some("Token abc123"));
    assert_eq!(sent[0].header(CSRF_HEADER), Some("c"));
}

#[tokio::test]
async fn logout_with_empty_response_body_succeeds() {
    let (auth, transport, creds) = service();
    creds.store_token("abc123");
    transport.respond(Ok(ApiResponse::new(204, "")));

    auth.logout().await.unwrap();

    assert_eq!(creds.token(), None);
}

#[tokio::test]
async fn logout_http_error_keeps_token_and_rejects() {
    let (auth, transport, creds) = service();
    creds.store_token("abc123");
    transport.respond(Ok(ApiResponse::new(500, "")));

    let err = auth.logout().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(creds.token().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn logout_network_error_keeps_token() {
    let (auth, transport, creds) = service();
    creds.store_token("abc123");
    transport.respond(Err(ApiError::Network("offline".into())));

    assert!(auth.logout().await.is_err());
    assert_eq!(creds.token().as_deref(), Some("abc123"));
}

// =============================================================
// get_current_user
// =============================================================

#[tokio::test]
async fn current_user_returns_body_untouched() {
    let (auth, transport, creds) = service();
    creds.store_token("abc123");
    creds.set_cookies("csrftoken=c");
    let user = json!({ "username": "alice", "role": "admin", "extra": [1, 2] });
    transport.respond_json(200, &user);

    assert_eq!(auth.get_current_user().await.unwrap(), user);

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "http://localhost:8000/api/auth/user/");
    assert_eq!(sent[0].header(AUTHORIZATION_HEADER), Some("Token abc123"));
    assert_eq!(sent[0].header(CSRF_HEADER), None);
}

#[tokio::test]
async fn current_user_unauthorized_rejects_without_touching_storage() {
    let (auth, transport, creds) = service();
    creds.store_token("stale");
    transport.respond_json(401, &json!({ "error": "User not authenticated" }));

    let err = auth.get_current_user().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
    assert_eq!(creds.token().as_deref(), Some("stale"));
}

#[tokio::test]
async fn current_user_unauthorized_when_signed_out() {
    let (auth, transport, creds) = service();
    transport.respond_json(401, &json!({ "error": "User not authenticated" }));

    assert!(auth.get_current_user().await.is_err());
    assert_eq!(creds.token(), None);
}
