//! Web API Auth Tests
//!
//! Integration tests for signup and signin endpoints.

mod common;

use common::{create_test_server, signin_user, signup_user};
use serde_json::{json, Value};

#[tokio::test]
async fn test_signup_success() {
    let (server, _db, _uploads) = create_test_server().await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "password": "password123"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["is_admin"], false);
    // Password never appears in responses
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let (server, _db, _uploads) = create_test_server().await;

    signup_user(&server, "alice", "password123").await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "password": "different456"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_short_password() {
    let (server, _db, _uploads) = create_test_server().await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "password": "short"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_empty_username() {
    let (server, _db, _uploads) = create_test_server().await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "  ",
            "password": "password123"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signin_success() {
    let (server, _db, _uploads) = create_test_server().await;

    signup_user(&server, "alice", "password123").await;

    let response = server
        .post("/api/auth/signin")
        .json(&json!({
            "username": "alice",
            "password": "password123"
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["data"]["token"].as_str().is_some());
    assert_eq!(body["data"]["is_admin"], false);
    assert_eq!(body["data"]["expires_in"], 900);
}

#[tokio::test]
async fn test_signin_wrong_password() {
    let (server, _db, _uploads) = create_test_server().await;

    signup_user(&server, "alice", "password123").await;

    let response = server
        .post("/api/auth/signin")
        .json(&json!({
            "username": "alice",
            "password": "wrong-password"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signin_unknown_user() {
    let (server, _db, _uploads) = create_test_server().await;

    let response = server
        .post("/api/auth/signin")
        .json(&json!({
            "username": "nobody",
            "password": "password123"
        }))
        .await;

    // Same status as a wrong password so the two are indistinguishable
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signin_token_works_on_guarded_route() {
    let (server, _db, _uploads) = create_test_server().await;

    signup_user(&server, "alice", "password123").await;
    let token = signin_user(&server, "alice", "password123").await;

    let response = server
        .post("/api/fields")
        .add_header(
            axum::http::header::AUTHORIZATION,
            format!("Bearer {}", token),
        )
        .json(&json!({
            "forumName": "general",
            "fields": [{"name": "Topic", "type": "text"}]
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    use forumhub::web::middleware::JwtClaims;
    use jsonwebtoken::{encode, EncodingKey, Header};

    let (server, _db, _uploads) = create_test_server().await;

    // Well-formed token signed with the right secret, expired an hour ago
    let now = chrono::Utc::now().timestamp();
    let claims = JwtClaims {
        sub: 1,
        is_admin: true,
        iat: (now - 7200) as u64,
        exp: (now - 3600) as u64,
        jti: uuid::Uuid::new_v4().to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = server
        .post("/api/fields")
        .add_header(
            axum::http::header::AUTHORIZATION,
            format!("Bearer {}", token),
        )
        .json(&json!({
            "forumName": "general",
            "fields": [{"name": "Topic", "type": "text"}]
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let (server, _db, _uploads) = create_test_server().await;

    let response = server
        .post("/api/fields")
        .add_header(
            axum::http::header::AUTHORIZATION,
            "Bearer not-a-real-token".to_string(),
        )
        .json(&json!({
            "forumName": "general",
            "fields": [{"name": "Topic", "type": "text"}]
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_check() {
    let (server, _db, _uploads) = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}
