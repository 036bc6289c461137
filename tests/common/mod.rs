//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use pulse::config::PulseConfig;
use pulse::observability::{LogRecord, Severity, Sink, SinkError};
use pulse::{AtomicThreshold, PulseServer, Shutdown, ShutdownReason};
use tokio::net::TcpListener;

/// A running sidecar bound to an ephemeral port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub threshold: Arc<AtomicThreshold>,
    pub shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger(ShutdownReason::Requested);
    }
}

/// Start a sidecar with `config`, controlling its own threshold at `level`.
#[allow(dead_code)]
pub async fn start_server(mut config: PulseConfig, level: Severity) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let threshold = Arc::new(AtomicThreshold::new(level));
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = PulseServer::new(config, threshold.clone()).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        threshold,
        shutdown,
    }
}

/// Sink that keeps every record it receives.
#[allow(dead_code)]
#[derive(Default)]
pub struct SpySink {
    pub records: Mutex<Vec<(Severity, String)>>,
}

#[allow(dead_code)]
impl SpySink {
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.records.lock().unwrap().iter().map(|(s, _)| *s).collect()
    }
}

impl Sink for SpySink {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), SinkError> {
        self.records
            .lock()
            .unwrap()
            .push((record.severity, record.message.to_string()));
        Ok(())
    }
}
