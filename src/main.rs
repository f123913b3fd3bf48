//! Trello Card Archiver Backend
//!
//! A webhook receiver that records archived Trello cards in MongoDB.

mod api;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::ArchiveStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArchiveStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Trello Card Archiver Backend");
    tracing::info!("Database: {}", config.mongo_db);
    tracing::info!("Collection: {}", config.mongo_collection);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Connect to MongoDB. The handle is created once here and injected into
    // the handlers; the driver pools connections internally, so warm
    // requests reuse them.
    let store = Arc::new(db::connect(&config).await?);

    // Create application state
    let state = AppState { store };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Trello sends the payload as a POST; it also probes the endpoint
        // with a HEAD/GET handshake before activating the webhook. axum's
        // `get` service answers HEAD as well.
        .route("/webhook", get(api::handshake).post(api::receive_webhook))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
