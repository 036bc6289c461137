//! Pulse HTTP endpoints and their registration.
//!
//! # Routes (default base path `/pulse`)
//! ```text
//! GET  /pulse/health   → health.rs
//! GET  /pulse/info     → info.rs
//! GET  /pulse/logger   → level.rs (read threshold)
//! POST /pulse/logger   → level.rs (replace threshold)
//! ```
//!
//! # Integration Profiles
//! - `Pulse::routes`: enabled routes at the root of a fresh router, for
//!   callers that nest them themselves
//! - `Pulse::register_routes`: mounts under the configured base path on the
//!   host's router and returns it
//! - `Pulse::into_router`: standalone router for the sidecar binary

pub mod error;
pub mod health;
pub mod info;
pub mod level;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::config::validation::{validate_base_path, ValidationError};
use crate::config::RoutesConfig;
use crate::observability::{AtomicThreshold, SeverityThreshold};

pub use error::LevelControlError;
pub use health::HealthStatus;
pub use info::BuildInfo;
pub use level::{LevelQueryResponse, LevelUpdateRequest};

/// State shared by the pulse handlers.
#[derive(Debug, Clone)]
pub struct PulseState {
    pub threshold: Arc<dyn SeverityThreshold>,
}

/// Route registrar for the pulse endpoints.
#[derive(Debug, Clone)]
pub struct Pulse {
    config: RoutesConfig,
    state: PulseState,
}

impl Pulse {
    /// Create a registrar controlling `threshold`.
    ///
    /// Fails if the base path cannot be used as a mount prefix.
    pub fn new(
        config: RoutesConfig,
        threshold: Arc<dyn SeverityThreshold>,
    ) -> Result<Self, ValidationError> {
        validate_base_path(&config.base_path)?;
        tracing::debug!(base_path = %config.base_path, "Pulse module initializing");

        Ok(Self {
            config,
            state: PulseState { threshold },
        })
    }

    /// Every endpoint under `/pulse`, controlling the process-wide threshold.
    pub fn with_defaults() -> Self {
        Self {
            config: RoutesConfig::default(),
            state: PulseState {
                threshold: AtomicThreshold::global(),
            },
        }
    }

    pub fn config(&self) -> &RoutesConfig {
        &self.config
    }

    pub fn threshold(&self) -> &Arc<dyn SeverityThreshold> {
        &self.state.threshold
    }

    /// Enabled routes, relative to the root of the returned router.
    pub fn routes<S>(&self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let mut router = Router::new();

        if self.config.enable_health {
            router = router.route("/health", get(health::get_health));
            tracing::debug!("Health routes registered");
        }

        if self.config.enable_logger {
            router = router.route("/logger", get(level::get_level).post(level::set_level));
            tracing::debug!("Logger routes registered");
        }

        if self.config.enable_info {
            router = router.route("/info", get(info::get_info));
            tracing::debug!("Info routes registered");
        }

        router.with_state(self.state.clone())
    }

    /// Mount the enabled routes on `router` under the configured base path.
    ///
    /// # Panics
    /// If `router` already has a conflicting route.
    pub fn register_routes<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let router = match self.config.base_path.as_str() {
            "" | "/" => router.merge(self.routes()),
            base => router.nest(base, self.routes()),
        };

        tracing::info!(base_path = %self.config.base_path, "Pulse routes registered");
        router
    }

    /// A router serving only the pulse endpoints.
    pub fn into_router(self) -> Router {
        self.register_routes(Router::new())
    }
}
