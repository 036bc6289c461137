//! Pulse: operational sidecar with a runtime-adjustable log severity.

pub mod config;
pub mod endpoints;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::PulseConfig;
pub use endpoints::Pulse;
pub use http::PulseServer;
pub use lifecycle::{Shutdown, ShutdownReason};
pub use observability::{AtomicThreshold, Field, Logger, Severity, SeverityThreshold};
