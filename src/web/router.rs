//! Router configuration for the Web API.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_definition, create_posts, delete_definition, delete_post, list_definitions,
    list_posts, signin, signup, update_post, AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
    max_upload_size_mb: u64,
) -> Router {
    let auth_routes = Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin));

    let forum_routes = Router::new()
        .route("/", get(list_posts).post(create_posts))
        .route("/:id", put(update_post).delete(delete_post));

    let field_routes = Router::new()
        .route("/", get(list_definitions).post(create_definition))
        .route("/:forum_name", delete(delete_definition));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/forums", forum_routes)
        .nest("/fields", field_routes);

    // Clone jwt_state for the middleware closure
    let jwt_state_for_middleware = jwt_state.clone();

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .layer(DefaultBodyLimit::max((max_upload_size_mb * 1024 * 1024) as usize))
        .with_state(app_state)
}

/// Create a router serving uploaded files statically.
pub fn create_uploads_router(uploads_path: impl AsRef<Path>) -> Router {
    Router::new().nest_service("/uploads", ServeDir::new(uploads_path.as_ref()))
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }
}
