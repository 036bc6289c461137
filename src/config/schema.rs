//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the sidecar.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::observability::{LogFormat, Severity};

/// Root configuration for the pulse sidecar.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PulseConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Which endpoint groups to mount, and where.
    pub routes: RoutesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Route registration settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutesConfig {
    /// Prefix for every pulse endpoint. Empty or "/" mounts at the root.
    pub base_path: String,

    /// Mount `GET {base_path}/health`.
    pub enable_health: bool,

    /// Mount `GET {base_path}/info`.
    pub enable_info: bool,

    /// Mount `GET|POST {base_path}/logger`.
    pub enable_logger: bool,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            base_path: "/pulse".to_string(),
            enable_health: true,
            enable_info: true,
            enable_logger: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Initial severity threshold (debug, info, warn, error, dpanic, panic, fatal).
    pub log_level: Severity,

    /// Output format for the process's own diagnostics.
    pub log_format: LogFormat,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}
