//! Shutdown coordination for the sidecar.
//!
//! Once triggered, `PulseServer::run` stops accepting connections and waits
//! for in-flight pulse requests, each bounded by `timeouts.request_secs`.
//! The severity threshold is not reset; it belongs to the process, not the
//! server.

use tokio::sync::broadcast;

/// Why the sidecar is stopping. Logged when the trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT or SIGTERM.
    Signal,
    /// The embedding code asked for it, e.g. a test harness going away.
    Requested,
}

impl ShutdownReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Signal => "signal",
            ShutdownReason::Requested => "requested",
        }
    }
}

/// Fan-out of a single stop request to every server draining on it.
///
/// Only receivers subscribed before [`Shutdown::trigger`] are notified, so
/// subscribe before spawning the server.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `PulseServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to drain. Returns how many were notified.
    pub fn trigger(&self, reason: ShutdownReason) -> usize {
        let notified = self.tx.send(()).unwrap_or(0);
        tracing::info!(reason = reason.as_str(), servers = notified, "Draining");
        notified
    }

    /// Servers still draining or waiting.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.clone().subscribe();
        assert_eq!(shutdown.receiver_count(), 2);

        assert_eq!(shutdown.trigger(ShutdownReason::Requested), 2);
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[test]
    fn test_trigger_without_subscribers() {
        let shutdown = Shutdown::new();
        assert_eq!(shutdown.trigger(ShutdownReason::Signal), 0);

        let mut late = shutdown.subscribe();
        assert!(late.try_recv().is_err());
    }
}
