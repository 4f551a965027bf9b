//! Error types for the directory.
//!
//! Only loading the record collection can fail. Malformed addresses and
//! unparseable numbers are resolved locally and never become errors.

use thiserror::Error;

/// Failure reading the provider collection from its source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode provider records: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Session-level failure; terminal until the session is started again
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to load provider directory: {0}")]
    DataLoad(#[source] SourceError),
}

pub type Result<T, E = SourceError> = std::result::Result<T, E>;
