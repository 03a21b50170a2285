//! Pairing serialization errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while writing a pairing as a table.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ExportError {
    /// The CSV writer failed
    #[error("Failed to write assignments: {message}")]
    Write {
        /// Writer message
        message: String,
    },
}

impl ExportError {
    pub fn write(e: impl std::fmt::Display) -> Self {
        Self::Write { message: e.to_string() }
    }
}
