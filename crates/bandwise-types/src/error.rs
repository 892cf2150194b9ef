//! Error types for the bandwise service.
//!
//! [`BandwiseError`] covers failures that are not specific to one crate:
//! configuration problems and the I/O or JSON errors raised while reading
//! configuration and model files.

use thiserror::Error;

/// Top-level error type shared across bandwise crates.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BandwiseError {
    /// Configuration is malformed or semantically invalid.
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// A configuration file was named explicitly but does not exist.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// The path that was looked up.
        path: String,
    },

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BandwiseError>;
