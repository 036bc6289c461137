//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the pulse endpoints
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener
//! - Stop on the shutdown broadcast

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::validation::ValidationError;
use crate::config::PulseConfig;
use crate::endpoints::Pulse;
use crate::observability::SeverityThreshold;

/// Standalone HTTP server for the sidecar.
pub struct PulseServer {
    router: Router,
    config: PulseConfig,
}

impl PulseServer {
    /// Create a new server controlling `threshold`.
    pub fn new(
        config: PulseConfig,
        threshold: Arc<dyn SeverityThreshold>,
    ) -> Result<Self, ValidationError> {
        let pulse = Pulse::new(config.routes.clone(), threshold)?;
        let router = Self::build_router(&config, pulse);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &PulseConfig, pulse: Pulse) -> Router {
        pulse
            .into_router()
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_path = %self.config.routes.base_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }
}
