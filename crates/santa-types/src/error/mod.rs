//! Typed error definitions for the Secret Santa exchange.
//!
//! Every failure an exchange can hit is terminal for that invocation. The
//! variants carry enough detail (participant name and id, row number, column
//! names) for a caller to fix the input tables and try again.

mod assignment;
mod config;
mod export;
mod ingest;

pub use assignment::AssignmentError;
pub use config::ConfigError;
pub use export::ExportError;
pub use ingest::IngestError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for one exchange: ingestion, pairing or emission.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// The uploaded tables could not be turned into participants
    #[error("{0}")]
    Ingest(#[from] IngestError),

    /// The engine could not complete a pairing
    #[error("{0}")]
    Assignment(#[from] AssignmentError),

    /// The pairing could not be serialized
    #[error("{0}")]
    Export(#[from] ExportError),
}

impl TypedError {
    /// Stable machine-readable kind, used as the `error` field of API responses.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ingest(e) => e.kind(),
            Self::Assignment(e) => e.kind(),
            Self::Export(_) => "export",
        }
    }

    /// Whether the failure was caused by the caller's input rather than the service.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Ingest(_) | Self::Assignment(_))
    }
}
