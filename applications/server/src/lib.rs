//! Cadence Server Library
//!
//! HTTP boundary for the playlist service: configuration, error mapping and
//! the axum router over the `cadence-core` activities.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
