//! CardForge HTTP API Server
//!
//! Provides REST API endpoints for ID-card design templates and image
//! uploads, backed by a document store.

use axum::{Router, extract::DefaultBodyLimit, response::Json, routing::get};
use cardforge_store::DocumentStore;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use config::ServerConfig;
use error::{ApiError, Result};

/// Main application state
#[derive(Clone)]
pub struct AppState {
    /// Shared store handle, `None` when no database is configured
    pub store: Option<Arc<dyn DocumentStore>>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, config: ServerConfig) -> Self {
        Self { store, config }
    }

    /// The configured store, or an internal error when there is none
    pub fn store(&self) -> Result<&dyn DocumentStore> {
        self.store.as_deref().ok_or_else(ApiError::database_unavailable)
    }
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let body_limit = match state.config.max_body_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/", get(root))
        // Diagnostics
        .route("/test", get(routes::diagnostics::test_database))
        // API routes
        .nest("/api", api_routes())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(body_limit),
        )
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/templates", routes::templates::router())
        .nest("/uploads", routes::uploads::router())
}

/// Readiness banner
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "ID Card Generator Backend Ready"
    }))
}
