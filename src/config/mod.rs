//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (PULSE_* environment overrides)
//!     → validation.rs (semantic checks)
//!     → PulseConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the log level changes at runtime
//!   through the threshold, not through the config
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, PulseConfig, RoutesConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
