//! # Santa Types
//!
//! Core types, models, and error definitions for the Secret Santa exchange.
//!
//! - **`error`** - Typed error hierarchy for ingestion, assignment, export and configuration
//! - **`models`** - Domain models (Participant, PriorMapping, Assignment, Pairing, AppConfig)
//!
//! ## Architecture Role
//!
//! `santa-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     santa-types (this crate)
//!            │
//!            ▼
//!       santa-core
//!            │
//!            ▼
//!      santa-server
//! ```

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{AssignmentError, ConfigError, ExportError, IngestError, TypedError};

// Re-export core model types
pub use models::{AppConfig, Assignment, Pairing, Participant, PriorMapping, ServerConfig};
