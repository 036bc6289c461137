//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Host call sites:
//!     → logger.rs (Logger::info, Logger::warn, ...)
//!     → threshold.rs (enabled?)
//!     → sink.rs (JSON line on stderr)
//!
//! Crate diagnostics (tracing macros):
//!     → logging.rs (ThresholdFilter, same threshold)
//!     → fmt layer on stderr
//!
//! Control plane:
//!     → endpoints::logger (get / set)
//!     → threshold.rs
//! ```
//!
//! # Design Decisions
//! - One threshold gates both the façade and `tracing` events
//! - The threshold is read lock-free on every call
//! - Emission never fails the caller

pub mod logger;
pub mod logging;
pub mod severity;
pub mod sink;
pub mod threshold;

pub use logger::{Field, FieldValue, LogRecord, Logger};
pub use logging::{LogFormat, ThresholdFilter};
pub use severity::{Severity, UnknownSeverity};
pub use sink::{JsonSink, Sink, SinkError};
pub use threshold::{AtomicThreshold, SeverityThreshold};
