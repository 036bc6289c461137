//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → endpoints (health, info, logger)
//!     → Send to client
//! ```

pub mod server;

pub use server::PulseServer;
