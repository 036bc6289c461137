//! Process-wide severity threshold.
//!
//! # Responsibilities
//! - Hold the minimum severity that log records must reach to be emitted
//! - Serve reads from every log call site without blocking
//! - Accept replacement from the control endpoint
//!
//! # Design Decisions
//! - One `AtomicU8` holds the level; no mutex on the read path
//! - Callers depend on the `SeverityThreshold` trait, not on the atomic
//! - Last writer wins between concurrent `set` calls

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

use super::severity::Severity;

/// Narrow `{get, set}` interface over the active threshold.
pub trait SeverityThreshold: Send + Sync + std::fmt::Debug {
    /// Current threshold.
    fn get(&self) -> Severity;

    /// Replace the threshold.
    fn set(&self, level: Severity);

    /// Returns true if a record at `level` passes the threshold.
    #[inline]
    fn enabled(&self, level: Severity) -> bool {
        level >= self.get()
    }
}

/// Lock-free threshold backed by a single atomic byte.
#[derive(Debug)]
pub struct AtomicThreshold {
    level: AtomicU8,
}

static GLOBAL: OnceLock<Arc<AtomicThreshold>> = OnceLock::new();

impl AtomicThreshold {
    pub const fn new(level: Severity) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
        }
    }

    /// The process-wide threshold, created at `Info` on first use.
    pub fn global() -> Arc<AtomicThreshold> {
        GLOBAL
            .get_or_init(|| Arc::new(AtomicThreshold::default()))
            .clone()
    }
}

impl Default for AtomicThreshold {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl SeverityThreshold for AtomicThreshold {
    #[inline]
    fn get(&self) -> Severity {
        // Only `set` stores, and it only stores valid discriminants.
        Severity::from_u8(self.level.load(Ordering::Acquire)).unwrap_or_default()
    }

    fn set(&self, level: Severity) {
        self.level.store(level as u8, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_default_is_info() {
        let threshold = AtomicThreshold::default();
        assert_eq!(threshold.get(), Severity::Info);
        assert!(threshold.enabled(Severity::Info));
        assert!(threshold.enabled(Severity::Error));
        assert!(!threshold.enabled(Severity::Debug));
    }

    #[test]
    fn test_set_then_get() {
        let threshold = AtomicThreshold::default();
        for level in Severity::ALL {
            threshold.set(level);
            assert_eq!(threshold.get(), level);
        }
    }

    #[test]
    fn test_global_is_shared() {
        let a = AtomicThreshold::global();
        let b = AtomicThreshold::global();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_concurrent_writers_leave_one_of_their_values() {
        let threshold = Arc::new(AtomicThreshold::default());
        let written = [Severity::Debug, Severity::Warn, Severity::Error, Severity::Fatal];

        thread::scope(|s| {
            for level in written {
                let threshold = &threshold;
                s.spawn(move || {
                    for _ in 0..10_000 {
                        threshold.set(level);
                    }
                });
            }
            for _ in 0..4 {
                let threshold = &threshold;
                s.spawn(move || {
                    for _ in 0..10_000 {
                        let seen = threshold.get();
                        assert!(seen == Severity::Info || written.contains(&seen));
                    }
                });
            }
        });

        assert!(written.contains(&threshold.get()));
    }
}
