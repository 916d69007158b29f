//! CardForge HTTP API Server binary

use cardforge_server::{
    AppState,
    config::ServerConfig,
    create_router,
    error::{ApiError, Result},
};
use cardforge_store::{DocumentStore, MongoStore};
use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "cardforge_server=debug,tower_http=debug".to_string()),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    info!(
        "Starting CardForge Server on {}:{}",
        config.host, config.port
    );

    let store = connect_store(&config).await;

    // Create application state
    let state = AppState::new(store, config.clone());

    // Build router
    let app = create_router(state);

    // Start server
    let ip = config
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|_| ApiError::Config(format!("Invalid HOST value: {}", config.host)))?;
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the shared store handle; the server runs without one on failure
async fn connect_store(config: &ServerConfig) -> Option<Arc<dyn DocumentStore>> {
    let Some(url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set, starting without a database");
        return None;
    };

    match MongoStore::connect(url, &config.database_name).await {
        Ok(store) => {
            info!("Using MongoDB database '{}'", config.database_name);
            let store: Arc<dyn DocumentStore> = Arc::new(store);
            Some(store)
        }
        Err(e) => {
            error!("Failed to connect to MongoDB: {}", e);
            None
        }
    }
}
