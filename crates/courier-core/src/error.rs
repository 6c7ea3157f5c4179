//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they surface core validation failures.

use thiserror::Error;

/// Errors raised while constructing core values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid transport profile {name:?}: {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("unknown transport mode {0:?}: expected \"car\", \"bicycle\", or \"walk\"")]
    UnknownTransportMode(String),

    #[error("unknown priority {0:?}: expected \"High\", \"Medium\", or \"Low\"")]
    UnknownPriority(String),

    #[error("coordinate ({lat}, {lon}) is outside the valid latitude/longitude range")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `courier-core`.
pub type CoreResult<T> = Result<T, CoreError>;
