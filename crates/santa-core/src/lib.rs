//! # Santa Core
//!
//! Core business logic for the Secret Santa exchange.
//!
//! ```text
//! santa-core/src/modules/
//! ├── roster.rs      # CSV bytes -> participants / prior mapping
//! ├── assignment.rs  # randomized constrained pairing engine
//! ├── export.rs      # pairing -> CSV bytes
//! ├── exchange.rs    # ingest -> assign -> export pipeline with retry policy
//! ├── config.rs      # persisted AppConfig
//! └── delivery.rs    # POST a generated table to a remote endpoint
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod modules;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use modules::assignment::assign;
pub use modules::exchange::{run_exchange, ExchangeOptions, ExchangeOutcome};
pub use santa_types::{Assignment, Pairing, Participant, PriorMapping};
