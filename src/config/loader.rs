//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::PulseConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::observability::UnknownSeverity;

/// Environment variable overriding `listener.bind_address`.
pub const ENV_BIND_ADDRESS: &str = "PULSE_BIND_ADDRESS";
/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "PULSE_LOG_LEVEL";
/// Environment variable overriding `routes.base_path`.
pub const ENV_BASE_PATH: &str = "PULSE_BASE_PATH";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("PULSE_LOG_LEVEL: {0}")]
    Env(#[from] UnknownSeverity),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides are applied after parsing and before validation.
pub fn load_config(path: &Path) -> Result<PulseConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: PulseConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration from defaults plus environment overrides only.
pub fn load_from_env() -> Result<PulseConfig, ConfigError> {
    let mut config = PulseConfig::default();

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `PULSE_*` overrides read through `lookup`.
pub fn apply_env_overrides<F>(config: &mut PulseConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(addr) = lookup(ENV_BIND_ADDRESS) {
        config.listener.bind_address = addr;
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.observability.log_level = level.parse()?;
    }
    if let Some(base_path) = lookup(ENV_BASE_PATH) {
        config.routes.base_path = base_path;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::Severity;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = PulseConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                (ENV_BIND_ADDRESS, "127.0.0.1:9000"),
                (ENV_LOG_LEVEL, "Error"),
                (ENV_BASE_PATH, "/ops"),
            ]),
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.observability.log_level, Severity::Error);
        assert_eq!(config.routes.base_path, "/ops");
    }

    #[test]
    fn test_bad_level_override() {
        let mut config = PulseConfig::default();
        let err = apply_env_overrides(&mut config, env(&[(ENV_LOG_LEVEL, "shout")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_message_lists_every_error() {
        let err = ConfigError::Validation(vec![
            ValidationError::NoEndpoints,
            ValidationError::RequestTimeout,
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("Validation failed: "));
        assert!(msg.contains("disabled"));
        assert!(msg.contains("request_secs"));
    }
}
