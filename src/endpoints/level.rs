//! Runtime log level control.
//!
//! # Endpoints
//! - `GET  {base}/logger` → `200 {"level":"<name>"}`
//! - `POST {base}/logger` with `{"level":"<name>"}` → `204`, or `400` with a
//!   plaintext reason
//!
//! # Design Decisions
//! - The body is read as raw bytes so a missing content type is accepted and
//!   malformed JSON is told apart from a missing field
//! - No retries; a rejected request leaves the threshold untouched

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::LevelControlError;
use super::PulseState;
use crate::observability::Severity;

#[derive(Debug, Serialize)]
pub struct LevelQueryResponse {
    pub level: Severity,
}

/// Body of `POST {base}/logger`. Must be a JSON object; keys other than
/// `level` are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpdateRequest {
    /// `None` when the key is absent or `null`.
    pub level: Option<String>,
}

impl LevelUpdateRequest {
    /// Decode a request body. Fails unless it is an object whose `level`,
    /// when present, is a string or `null`.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut object: Map<String, Value> = serde_json::from_slice(body)?;
        let level = match object.remove("level") {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(Self { level })
    }
}

pub async fn get_level(State(state): State<PulseState>) -> Json<LevelQueryResponse> {
    Json(LevelQueryResponse {
        level: state.threshold.get(),
    })
}

pub async fn set_level(
    State(state): State<PulseState>,
    body: Bytes,
) -> Result<StatusCode, LevelControlError> {
    let level = parse_update(&body).inspect_err(|e| {
        tracing::warn!(kind = e.kind(), error = %e, "Rejected log level update");
    })?;

    let previous = state.threshold.get();
    state.threshold.set(level);

    tracing::info!(from = %previous, to = %level, "Log level changed");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_update(body: &[u8]) -> Result<Severity, LevelControlError> {
    let request =
        LevelUpdateRequest::from_slice(body).map_err(LevelControlError::MalformedPayload)?;
    let name = request.level.ok_or(LevelControlError::MissingField)?;
    Ok(name.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_decoding() {
        let request = LevelUpdateRequest::from_slice(br#"{"level":"info","x":1}"#).unwrap();
        assert_eq!(request.level.as_deref(), Some("info"));
        assert_eq!(LevelUpdateRequest::from_slice(b"{}").unwrap().level, None);
        assert!(LevelUpdateRequest::from_slice(br#"["info"]"#).is_err());
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(parse_update(br#"{"level":"debug"}"#).unwrap(), Severity::Debug);
        assert_eq!(parse_update(br#"{"level":"WARNING"}"#).unwrap(), Severity::Warn);
        assert_eq!(
            parse_update(br#"{"level":"error","extra":"ignored"}"#).unwrap(),
            Severity::Error
        );
    }

    #[test]
    fn test_parse_update_errors() {
        let kind = |body: &[u8]| parse_update(body).unwrap_err().kind();

        assert_eq!(kind(b""), "malformed_payload");
        assert_eq!(kind(b"{\"level\":"), "malformed_payload");
        assert_eq!(kind(b"[\"debug\"]"), "malformed_payload");
        assert_eq!(kind(br#"["debug"]"#), "malformed_payload");
        assert_eq!(kind(br#""debug""#), "malformed_payload");
        assert_eq!(kind(br#"{"level":3}"#), "malformed_payload");
        assert_eq!(kind(br#"{"level":["debug"]}"#), "malformed_payload");
        assert_eq!(kind(b"{}"), "missing_field");
        assert_eq!(kind(br#"{"level":null}"#), "missing_field");
        assert_eq!(kind(br#"{"level":"nonsense"}"#), "unknown_level");
        assert_eq!(kind(br#"{"level":""}"#), "unknown_level");
    }
}
