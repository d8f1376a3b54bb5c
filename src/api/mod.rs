//! HTTP surface for the dashboard.
//!
//! - `/`: dashboard page (checklist plus three chart slots)
//! - `/api/measures`: checklist options and default selection
//! - `/api/charts`: pie, line, and utility chart specs for a selection
//! - `/api/summary`: horizon-end figures for a selection
//! - `/api/projection.csv`: per-year projection table

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::dashboard::Dashboard;

/// Dashboard page; fetches `/api/measures` then re-renders on every checklist change.
const INDEX_HTML: &str = include_str!("index.html");

/// Builds the axum router with all routes.
///
/// The dashboard is immutable and shared through `Arc`; no locks needed.
pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/measures", get(handlers::get_measures))
        .route("/api/charts", get(handlers::get_charts))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/projection.csv", get(handlers::get_projection_csv))
        .with_state(dashboard)
        .layer(TraceLayer::new_for_http())
}

/// Binds to `addr` and serves until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(dashboard: Arc<Dashboard>, addr: SocketAddr) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "dashboard listening");
    axum::serve(listener, router(dashboard))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(%e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutting down");
}
