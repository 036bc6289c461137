//! Logger gating through the public API, driven by the control endpoint.

use std::sync::Arc;

use pulse::config::PulseConfig;
use pulse::{Field, Logger, Severity, SeverityThreshold};
use serde_json::json;

mod common;

#[tokio::test]
async fn test_endpoint_change_gates_logger() {
    let server = common::start_server(PulseConfig::default(), Severity::Info).await;
    let sink = Arc::new(common::SpySink::default());
    let logger = Logger::new(server.threshold.clone(), sink.clone());

    logger.debug("before", &[]);
    logger.info("before", &[Field::int("attempt", 1)]);
    assert_eq!(sink.severities(), [Severity::Info]);

    let res = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
        .post(server.url("/pulse/logger"))
        .json(&json!({ "level": "error" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);

    logger.info("after", &[]);
    logger.warn("after", &[]);
    logger.error("after", &[]);
    assert_eq!(sink.severities(), [Severity::Info, Severity::Error]);
}

#[test]
fn test_every_level_against_every_threshold() {
    for threshold in Severity::ALL {
        let state = Arc::new(pulse::AtomicThreshold::new(threshold));
        let sink = Arc::new(common::SpySink::default());
        let logger = Logger::new(state.clone(), sink.clone());

        for level in [Severity::Debug, Severity::Info, Severity::Warn, Severity::Error] {
            logger.log(level, "probe", &[]);
        }

        let expected = [Severity::Debug, Severity::Info, Severity::Warn, Severity::Error]
            .iter()
            .filter(|level| **level >= state.get())
            .count();
        assert_eq!(sink.count(), expected, "threshold {threshold}");
    }
}
