//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for the process
//! - Gate `tracing` events with the runtime severity threshold
//!
//! # Design Decisions
//! - JSON format for production, pretty format for development
//! - The filter is evaluated per event, never cached per callsite, so a
//!   level change takes effect on the next event

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::subscriber::Interest;
use tracing::Metadata;
use tracing_subscriber::layer::{Context, Filter, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, Layer, Registry};

use super::severity::Severity;
use super::threshold::SeverityThreshold;

/// Output format for `tracing` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Per-layer filter that admits events at or above the threshold.
///
/// Spans are always admitted; only events carry a severity.
#[derive(Debug, Clone)]
pub struct ThresholdFilter {
    threshold: Arc<dyn SeverityThreshold>,
}

impl ThresholdFilter {
    pub fn new(threshold: Arc<dyn SeverityThreshold>) -> Self {
        Self { threshold }
    }

    fn admits(&self, metadata: &Metadata<'_>) -> bool {
        !metadata.is_event()
            || self
                .threshold
                .enabled(Severity::from_tracing(*metadata.level()))
    }
}

impl<S> Filter<S> for ThresholdFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.admits(metadata)
    }

    fn callsite_enabled(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }
}

/// Install the global `tracing` subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(
    format: LogFormat,
    threshold: Arc<dyn SeverityThreshold>,
) -> Result<(), TryInitError> {
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer().with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(ThresholdFilter::new(threshold)))
        .try_init()
}
