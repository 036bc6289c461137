//! Control endpoint errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::observability::UnknownSeverity;

/// Why a level update was rejected. Every variant maps to 400.
#[derive(Debug, Error)]
pub enum LevelControlError {
    /// Body is not a JSON object with string values.
    #[error("malformed JSON payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("missing level field")]
    MissingField,

    #[error(transparent)]
    UnknownLevel(#[from] UnknownSeverity),
}

impl LevelControlError {
    /// Stable identifier for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LevelControlError::MalformedPayload(_) => "malformed_payload",
            LevelControlError::MissingField => "missing_field",
            LevelControlError::UnknownLevel(_) => "unknown_level",
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for LevelControlError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
