//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the route prefix can be mounted
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PulseConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::PulseConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("routes.base_path {0:?} must be empty or a literal path starting with '/' and not ending with '/'")]
    BasePath(String),

    #[error("routes: every endpoint group is disabled")]
    NoEndpoints,

    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &PulseConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Err(e) = validate_base_path(&config.routes.base_path) {
        errors.push(e);
    }

    let routes = &config.routes;
    if !(routes.enable_health || routes.enable_info || routes.enable_logger) {
        errors.push(ValidationError::NoEndpoints);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check that `base_path` can be used as a mount prefix.
pub fn validate_base_path(base_path: &str) -> Result<(), ValidationError> {
    let mountable = match base_path {
        "" | "/" => true,
        p => {
            p.starts_with('/')
                && !p.ends_with('/')
                && !p.contains("//")
                && p[1..].split('/').all(is_literal_segment)
        }
    };

    if mountable {
        Ok(())
    } else {
        Err(ValidationError::BasePath(base_path.to_string()))
    }
}

/// A segment the router matches verbatim: no captures or wildcards.
fn is_literal_segment(segment: &str) -> bool {
    !segment.starts_with(':') && !segment.contains(['*', '{', '}'])
}
