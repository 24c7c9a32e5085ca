//! Test helpers for Web API integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use forumhub::db::UserRepository;
use forumhub::file::FileStorage;
use forumhub::web::handlers::AppState;
use forumhub::web::middleware::JwtState;
use forumhub::web::router::{create_health_router, create_router, create_uploads_router};
use forumhub::Database;

/// JWT secret used by all tests.
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only";

/// Create a test server with an in-memory database and a temporary uploads
/// directory. The TempDir must be kept alive for the duration of the test.
pub async fn create_test_server() -> (TestServer, Database, TempDir) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let uploads_dir = TempDir::new().expect("Failed to create uploads dir");
    let storage = FileStorage::new(uploads_dir.path()).expect("Failed to create storage");

    let app_state = Arc::new(AppState::new(db.clone(), storage, TEST_JWT_SECRET, 900));
    let jwt_state = Arc::new(JwtState::new(TEST_JWT_SECRET));

    let router = create_router(app_state, jwt_state, &[], 10)
        .merge(create_health_router())
        .merge(create_uploads_router(uploads_dir.path()));

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db, uploads_dir)
}

/// Register a test user.
pub async fn signup_user(server: &TestServer, username: &str, password: &str) -> Value {
    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": username,
            "password": password
        }))
        .await;

    response.json::<Value>()
}

/// Sign a test user in and return the bearer token.
pub async fn signin_user(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/signin")
        .json(&json!({
            "username": username,
            "password": password
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    body["data"]["token"]
        .as_str()
        .expect("Missing token in signin response")
        .to_string()
}

/// Register a user, promote them to administrator, and return a fresh token.
pub async fn signup_admin(server: &TestServer, db: &Database, username: &str) -> String {
    signup_user(server, username, "password123").await;

    let repo = UserRepository::new(db.pool());
    let user = repo
        .get_by_username(username)
        .await
        .expect("Failed to look up user")
        .expect("User not found");
    repo.set_admin(user.id, true)
        .await
        .expect("Failed to promote user");

    // Token must be issued after promotion so the admin claim is present
    signin_user(server, username, "password123").await
}
