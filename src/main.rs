use tracing::info;

use forumhub::{Config, Database, FileStorage, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = forumhub::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        forumhub::logging::init_console_only(&config.logging.level);
    }

    info!("forumhub - Forum posting service");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let storage = match FileStorage::new(&config.uploads.path) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!("Failed to initialize upload storage: {}", e);
            std::process::exit(1);
        }
    };
    info!("Upload storage initialized at: {}", config.uploads.path);

    let server = WebServer::new(&config, db, storage);
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
