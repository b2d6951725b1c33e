//! # HTTP Server
//!
//! Owns the service configuration, builds the axum router and serves it until
//! Ctrl-C.
//!
//! ## Routes
//!
//! ```text
//! GET /informasi-nim?nim=...         -> student summary
//! GET /perolehan-nilai?strBase64=... -> weighted grade
//! GET /perbedaan-l?strBase64=...     -> path distance
//! GET /paling-ter?strBase64=...      -> top 'ter' word
//! GET /api/health                    -> status and request counters
//! ```

use anyhow::Result;
use axum::{routing::get, Router};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::common::config::ServiceConfig;
use crate::server::handlers::{self, AppState};

pub struct Server {
    config: ServiceConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Create a server from an already loaded configuration.
    ///
    /// # Example
    /// ```ignore
    /// let server = Server::new(ServiceConfig::default());
    /// server.run().await?;
    /// ```
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState::default()),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Build the router with every endpoint attached.
    pub fn router(&self) -> Router {
        build_router(self.state(), self.config.server.cors_permissive)
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.server.address).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        let app = self.router();

        info!("🌐 Server running on http://{}", addr);
        info!("📡 Health endpoint: http://{}/api/health", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("👋 Server stopped");
        Ok(())
    }
}

/// Assemble the routes over `state`.
pub fn build_router(state: Arc<AppState>, cors_permissive: bool) -> Router {
    let router = Router::new()
        .route("/informasi-nim", get(handlers::informasi_nim))
        .route("/perolehan-nilai", get(handlers::perolehan_nilai))
        .route("/perbedaan-l", get(handlers::perbedaan_l))
        .route("/paling-ter", get(handlers::paling_ter))
        .route("/api/health", get(handlers::health_check));

    let router = if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("🛑 Shutdown signal received");
}
