//! Error types
//!
//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AmalgamError>;

/// Errors produced while amalgamating
#[derive(Debug, Error)]
pub enum AmalgamError {
    /// A referenced path could not be opened for reading
    #[error("cannot read {}: {source}", path.display())]
    Resolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure outside path resolution (output and config writes)
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
