use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::{BookingRepository, BookingStore};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {}: {e}", cfg.server.bind_addr())))
}

/// Build the router over a file-backed store at `data_file` (its directory is created if missing).
pub async fn build_app(data_file: &str) -> Result<Router, StartupError> {
    let store = BookingStore::new(data_file).await?;
    let repo: Arc<dyn BookingRepository> = store;
    Ok(routes::build_router(AppState::new(repo), build_cors()))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(service = "server", event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => warn!(service = "server", event = "signal_error", error = %e, "cannot listen for Ctrl+C"),
    }
}

/// Serve with an already loaded configuration until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg.storage.data_file).await?;
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, data_file = %cfg.storage.data_file, debug = cfg.server.debug, "Moto Booking API running");
    info!("Swagger documentation available at http://{addr}/docs");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
