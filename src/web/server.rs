//! Web server for forumhub.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::db::Database;
use crate::file::FileStorage;

use super::handlers::AppState;
use super::middleware::JwtState;
use super::router::{create_health_router, create_router, create_uploads_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// JWT state.
    jwt_state: Arc<JwtState>,
    /// Allowed CORS origins.
    cors_origins: Vec<String>,
    /// Maximum request body size in megabytes.
    max_upload_size_mb: u64,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &Config, db: Database, storage: FileStorage) -> Self {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .expect("Invalid web server address");

        let app_state = AppState::new(
            db,
            storage,
            &config.auth.jwt_secret,
            config.auth.token_expiry_secs,
        );
        let jwt_state = Arc::new(JwtState::new(&config.auth.jwt_secret));

        Self {
            addr,
            app_state: Arc::new(app_state),
            jwt_state,
            cors_origins: config.cors.origins.clone(),
            max_upload_size_mb: config.uploads.max_upload_size_mb,
        }
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Build the complete application router.
    pub fn router(&self) -> axum::Router {
        let uploads_path = self.app_state.storage.base_path().to_path_buf();

        create_router(
            self.app_state.clone(),
            self.jwt_state.clone(),
            &self.cors_origins,
            self.max_upload_size_mb,
        )
        .merge(create_health_router())
        .merge(create_uploads_router(uploads_path))
    }

    /// Run the web server.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }
}
