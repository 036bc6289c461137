//! Pulse sidecar (v1)
//!
//! Serves liveness, build metadata and runtime log level control over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                    PULSE                     │
//!                       │                                              │
//!   Operator request    │  ┌─────────┐    ┌───────────┐                │
//!   ────────────────────┼─▶│  http   │───▶│ endpoints │                │
//!                       │  │ server  │    │ health    │                │
//!                       │  └─────────┘    │ info      │                │
//!                       │                 │ logger ───┼──┐             │
//!                       │                 └───────────┘  │ get / set   │
//!                       │                                ▼             │
//!   Host call sites     │  ┌──────────┐           ┌─────────────┐      │
//!   ────────────────────┼─▶│  Logger  │──enabled?▶│ threshold   │      │
//!                       │  └────┬─────┘           │ (AtomicU8)  │      │
//!                       │       │ emit            └─────────────┘      │
//!                       │       ▼                                      │
//!                       │  ┌──────────┐                                │
//!                       │  │   sink   │──▶ stderr (JSON lines)         │
//!                       │  └──────────┘                                │
//!                       └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use pulse::config::{load_config, load_from_env, validate_config, ConfigError, PulseConfig};
use pulse::lifecycle::startup;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Operational sidecar: health, build info and runtime log level", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config: PulseConfig = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_from_env()?,
    };

    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    startup::run(config).await
}
