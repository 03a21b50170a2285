//! Unified error types for Santa Core.

use serde::Serialize;
use thiserror::Error;

/// Errors raised by operations that reach over the network.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Network request failed (HTTP client).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-success status.
    #[error("Delivery rejected with status {status}: {body}")]
    Delivery { status: u16, body: String },
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for Santa Core operations.
pub type AppResult<T> = Result<T, AppError>;
