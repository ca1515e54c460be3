//! Landing Server - HTTP front for the landing page
//!
//! This crate provides the web backend:
//! - Server-rendered landing page (hero, feature grid, footer)
//! - Health inquiry endpoint
//! - Static asset serving

pub mod render;
mod routes;
mod state;

use axum::{routing::get, Router};
use landing_core::{Environment, HealthContext, HealthReporter, DEFAULT_VERSION};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub environment: Environment,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "public".to_string(),
            environment: Environment::default(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl ServerConfig {
    /// Build the shared state this configuration describes
    pub fn app_state(&self) -> AppState {
        let context = HealthContext::new(self.environment, self.version.clone());
        AppState::new(HealthReporter::new(context))
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Landing page
        .route("/", get(routes::page::home_page))
        // Health inquiry
        .route("/api/health", get(routes::health::health_handler))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(config.app_state());
    let router = create_router(&config, state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Landing server starting on http://{}", listener.local_addr()?);
    tracing::info!("Static files served from: {}", config.static_dir);
    tracing::info!(
        environment = %config.environment,
        version = %config.version,
        "Health endpoint at /api/health"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Landing server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
