//! Crate error types.
//!
//! The portfolio engine itself is total over its input domain and defines no
//! error kinds; everything here belongs to the boundaries around it
//! (snapshot I/O, configuration, the HTTP server).

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Main crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Snapshot file could not be read or written
    #[error("Snapshot I/O error: {0}")]
    SnapshotIo(#[from] std::io::Error),

    /// Snapshot contents were not a valid portfolio
    #[error("Snapshot parse error: {0}")]
    SnapshotParse(#[from] serde_json::Error),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Server failed to bind or serve
    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Error::Server(msg.into())
    }
}
