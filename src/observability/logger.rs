//! Severity-gated logger façade.
//!
//! # Responsibilities
//! - One entry point per severity
//! - Drop records below the threshold before any formatting
//! - Stamp and hand surviving records to the sink
//! - Never surface sink failures to the caller
//!
//! # Data Flow
//! ```text
//! logger.warn(msg, fields)
//!     → threshold.enabled(Warn)?  no → return
//!     → LogRecord { timestamp: now, .. }
//!     → sink.write(record)        Err → dropped
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::severity::Severity;
use super::sink::{JsonSink, Sink};
use super::threshold::{AtomicThreshold, SeverityThreshold};

/// Value of a structured field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    /// Rendered error message.
    Error(String),
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Uint(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

/// A key/value pair attached to a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: &'static str,
    pub value: FieldValue,
}

impl Field {
    pub fn new(key: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    pub fn string(key: &'static str, value: impl Into<String>) -> Self {
        Self::new(key, FieldValue::String(value.into()))
    }

    pub fn int(key: &'static str, value: i64) -> Self {
        Self::new(key, value)
    }

    pub fn uint(key: &'static str, value: u64) -> Self {
        Self::new(key, value)
    }

    pub fn float(key: &'static str, value: f64) -> Self {
        Self::new(key, value)
    }

    pub fn bool(key: &'static str, value: bool) -> Self {
        Self::new(key, value)
    }

    /// An error rendered with `Display`, under the `error` key.
    pub fn error(err: &dyn std::error::Error) -> Self {
        Self::new("error", FieldValue::Error(err.to_string()))
    }
}

/// A record that passed the threshold. Lives for one sink call.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub message: &'a str,
    pub fields: &'a [Field],
}

/// Keys written for every record. A field using one is emitted as
/// `field.<key>` so the output never repeats a key.
const RECORD_KEYS: [&str; 3] = ["level", "timestamp", "msg"];

impl Serialize for LogRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.fields.len()))?;
        map.serialize_entry("level", &self.severity)?;
        map.serialize_entry(
            "timestamp",
            &self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        map.serialize_entry("msg", self.message)?;
        for field in self.fields {
            if RECORD_KEYS.contains(&field.key) {
                map.serialize_entry(&format!("field.{}", field.key), &field.value)?;
            } else {
                map.serialize_entry(field.key, &field.value)?;
            }
        }
        map.end()
    }
}

/// Logger gated by a shared [`SeverityThreshold`].
///
/// Cheap to clone; clones share the threshold and the sink.
#[derive(Clone)]
pub struct Logger {
    threshold: Arc<dyn SeverityThreshold>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub fn new(threshold: Arc<dyn SeverityThreshold>, sink: Arc<dyn Sink>) -> Self {
        Self { threshold, sink }
    }

    /// JSON lines on stderr.
    pub fn stderr(threshold: Arc<dyn SeverityThreshold>) -> Self {
        Self::new(threshold, Arc::new(JsonSink::stderr()))
    }

    pub fn threshold(&self) -> &Arc<dyn SeverityThreshold> {
        &self.threshold
    }

    /// Returns true if a record at `level` would be emitted.
    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        self.threshold.enabled(level)
    }

    /// Emit `message` at `level` if it passes the threshold.
    ///
    /// Only records; terminal behavior of `DPanic`, `Panic` and `Fatal`
    /// belongs to the dedicated methods.
    pub fn log(&self, level: Severity, message: &str, fields: &[Field]) {
        if !self.enabled(level) {
            return;
        }

        let record = LogRecord {
            timestamp: Utc::now(),
            severity: level,
            message,
            fields,
        };
        // Logging must not fail the caller.
        let _ = self.sink.write(&record);
    }

    pub fn debug(&self, message: &str, fields: &[Field]) {
        self.log(Severity::Debug, message, fields);
    }

    pub fn info(&self, message: &str, fields: &[Field]) {
        self.log(Severity::Info, message, fields);
    }

    pub fn warn(&self, message: &str, fields: &[Field]) {
        self.log(Severity::Warn, message, fields);
    }

    pub fn error(&self, message: &str, fields: &[Field]) {
        self.log(Severity::Error, message, fields);
    }

    /// Logs, then panics in debug builds.
    pub fn dpanic(&self, message: &str, fields: &[Field]) {
        self.log(Severity::DPanic, message, fields);
        if cfg!(debug_assertions) {
            panic!("{message}");
        }
    }

    /// Logs, then panics.
    pub fn panic(&self, message: &str, fields: &[Field]) -> ! {
        self.log(Severity::Panic, message, fields);
        panic!("{message}");
    }

    /// Logs, then exits the process with status 1.
    pub fn fatal(&self, message: &str, fields: &[Field]) -> ! {
        self.log(Severity::Fatal, message, fields);
        std::process::exit(1);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold.get())
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
///
/// Unless [`set_global`] ran first, this is a stderr JSON logger gated by
/// [`AtomicThreshold::global`].
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::stderr(AtomicThreshold::global()))
}

/// Install the process-wide logger. Fails once one is in place.
pub fn set_global(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

pub fn debug(message: &str, fields: &[Field]) {
    global().debug(message, fields);
}

pub fn info(message: &str, fields: &[Field]) {
    global().info(message, fields);
}

pub fn warn(message: &str, fields: &[Field]) {
    global().warn(message, fields);
}

pub fn error(message: &str, fields: &[Field]) {
    global().error(message, fields);
}

pub fn fatal(message: &str, fields: &[Field]) -> ! {
    global().fatal(message, fields)
}
