//! Error types for the core
//!
//! [`ConfigError`] is raised before any run starts. [`CapabilityError`] is
//! raised by optional capabilities at call time and is always resolved
//! through a fallback by the caller.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Invalid settings, rejected at construction or load time
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Similarity threshold outside (0, 1)
    #[error("similarity threshold must be in (0, 1), got {0}")]
    InvalidThreshold(f64),

    /// History scan limit of zero
    #[error("history limit must be at least 1")]
    InvalidHistoryLimit,

    /// A timeout of zero
    #[error("{0} timeout must be greater than zero")]
    InvalidTimeout(&'static str),

    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("cannot parse config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Failure of an optional external capability
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// Capability could not be loaded or reached
    #[error("capability unavailable: {0}")]
    Unavailable(String),

    /// Call did not finish in time
    #[error("call timed out after {0:?}")]
    Timeout(Duration),

    /// Transport or backend failure
    #[error("transport failure: {0}")]
    Transport(String),

    /// Response could not be interpreted
    #[error("malformed response: {0}")]
    Malformed(String),
}
