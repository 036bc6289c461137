//! Startup orchestration.
//!
//! # Order
//! 1. Seed the threshold from the validated config
//! 2. Install the `tracing` subscriber gated by that threshold
//! 3. Bind the listener and serve until shutdown
//!
//! Any startup error is fatal to the caller.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::PulseConfig;
use crate::http::PulseServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logger, logging, AtomicThreshold, Field, SeverityThreshold};

/// Run the sidecar with the process-wide threshold.
pub async fn run(config: PulseConfig) -> Result<(), Box<dyn std::error::Error>> {
    let threshold: Arc<dyn SeverityThreshold> = AtomicThreshold::global();
    threshold.set(config.observability.log_level);

    logging::init(config.observability.log_format, threshold.clone())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        log_level = %config.observability.log_level,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    logger::info(
        "Pulse sidecar starting",
        &[Field::string("bind_address", config.listener.bind_address.clone())],
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = PulseServer::new(config, threshold)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
