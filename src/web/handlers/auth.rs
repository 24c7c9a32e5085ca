//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use crate::db::{Database, NewUser, UserRepository};
use crate::file::FileStorage;
use crate::web::dto::request::{SigninRequest, SignupRequest};
use crate::web::dto::response::{ApiResponse, SigninResponse, UserResponse};
use crate::web::error::ApiError;
use crate::web::middleware::JwtClaims;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Upload file store.
    pub storage: FileStorage,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Token expiry in seconds.
    pub token_expiry: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, storage: FileStorage, jwt_secret: &str, token_expiry: u64) -> Self {
        Self {
            db,
            storage,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            token_expiry,
        }
    }

    /// Generate an access token for a user.
    pub fn generate_token(&self, user_id: i64, is_admin: bool) -> Result<String, ApiError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = JwtClaims {
            sub: user_id,
            is_admin,
            iat: now,
            exp: now + self.token_expiry,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            ApiError::internal("Failed to generate token")
        })
    }
}

/// POST /api/auth/signup - User registration.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    if req.username.trim().is_empty() {
        return Err(ApiError::validation("Username is required"));
    }

    crate::validate_password(&req.password)
        .map_err(|e| ApiError::validation(format!("Password error: {}", e)))?;

    let password_hash = crate::hash_password(&req.password)
        .map_err(|_| ApiError::internal("Failed to hash password"))?;

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .create(&NewUser::new(&req.username, password_hash))
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::validation("Username already exists")
            } else {
                tracing::error!("User creation failed: {}", e);
                ApiError::internal("Failed to create user")
            }
        })?;

    let response = UserResponse {
        id: user.id,
        username: user.username,
        is_admin: user.is_admin,
        created_at: user.created_at,
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::new(response))))
}

/// POST /api/auth/signin - User sign-in.
///
/// Unknown username and wrong password both fail with the same 400 so the
/// response does not reveal which part was wrong.
pub async fn signin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<ApiResponse<SigninResponse>>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .get_by_username(&req.username)
        .await
        .map_err(|e| {
            tracing::error!("User lookup failed: {}", e);
            ApiError::internal("Database error")
        })?
        .ok_or_else(|| ApiError::bad_request("Invalid username or password"))?;

    crate::verify_password(&req.password, &user.password)
        .map_err(|_| ApiError::bad_request("Invalid username or password"))?;

    let token = state.generate_token(user.id, user.is_admin)?;

    let response = SigninResponse {
        token,
        is_admin: user.is_admin,
        expires_in: state.token_expiry,
    };

    Ok(Json(ApiResponse::new(response)))
}
