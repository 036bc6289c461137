//! Log record destinations.
//!
//! A sink receives only records that already passed the threshold. Write
//! failures are reported to the logger, which drops them.

use std::io::{self, Write};
use std::sync::Mutex;

use super::logger::LogRecord;

/// Failure to hand a record to its destination.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to encode log record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write log record: {0}")]
    Io(#[from] io::Error),

    #[error("log sink writer poisoned")]
    Poisoned,
}

/// Destination for emitted log records.
pub trait Sink: Send + Sync {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), SinkError>;
}

/// Writes one JSON object per line.
///
/// ```text
/// {"level":"info","timestamp":"2024-05-01T12:00:00.000Z","msg":"started","port":8080}
/// ```
pub struct JsonSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl JsonSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Sink for JsonSink<W> {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), SinkError> {
        // Encode before taking the lock.
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut writer = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}
