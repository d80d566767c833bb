//! HTTP server exposing the contact form endpoint.
//!
//! This module builds the axum router and runs it until a shutdown signal
//! is received.

pub mod extract;
pub mod handlers;

pub use extract::ContactSubmission;
pub use handlers::AppState;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Path the contact form posts to.
pub const CONTACT_PATH: &str = "/connect";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(handlers::submit_contact))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server on `bind_address` until Ctrl-C or SIGTERM.
///
/// # Arguments
/// * `bind_address` - Socket address to listen on, e.g. `0.0.0.0:3000`
/// * `state` - Shared handler state
pub async fn run_server(bind_address: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(bind_address).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
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
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
