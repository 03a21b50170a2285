//! Core domain models for the Secret Santa exchange.

mod config;
mod pairing;
mod participant;

pub use config::{AppConfig, ServerConfig};
pub use pairing::{Assignment, Pairing};
pub use participant::{Participant, PriorMapping};
