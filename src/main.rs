//! Contact Relay - Main entry point
//!
//! Loads configuration, wires the Resend client into the contact service and
//! serves the form endpoint until shutdown.

use anyhow::Result;
use contact_relay::client::{AsyncResendClient, EmailSender};
use contact_relay::services::{ContactService, ContactServiceImpl};
use contact_relay::{AppState, Config, Metrics, ResendClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        api_url = %config.api_url,
        from = %config.from,
        to = %config.to,
        "Starting contact relay"
    );

    let sync_client = ResendClient::new(&config);
    let sender = Arc::new(AsyncResendClient::new(sync_client)) as Arc<dyn EmailSender>;

    let metrics = Metrics::new();
    let service = ContactServiceImpl::new(sender, config.from.clone(), config.to.clone())
        .with_metrics(metrics.clone());
    let state = AppState::new(Arc::new(service) as Arc<dyn ContactService>);

    contact_relay::server::run_server(&config.bind_address, state).await?;

    let summary = metrics.summary();
    info!(
        submissions = summary.submissions_total,
        rejected = summary.validation_failures_total,
        dispatched = summary.dispatch_total,
        failed = summary.dispatch_errors_total,
        avg_dispatch_ms = summary.dispatch_duration_avg_ms,
        "Contact relay shutdown complete"
    );
    Ok(())
}
