//! Web API for forumhub.
//!
//! HTTP surface built on axum: JWT-guarded JSON and multipart endpoints
//! plus static serving of uploaded images.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorCode};
pub use handlers::AppState;
pub use middleware::{AdminUser, AuthUser, JwtClaims, JwtState};
pub use router::{create_health_router, create_router, create_uploads_router};
pub use server::WebServer;
