//! Liveness endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// RFC 3339 time at which the response was built.
    pub datetime: String,
}

pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP",
        datetime: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
