//! Pairing engine errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building a pairing.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum AssignmentError {
    /// No participants were supplied
    #[error("No participants were supplied; at least one is required.")]
    EmptyInput,

    /// Two participants share the same identifier
    #[error("Duplicate participant ID: {id}")]
    DuplicateParticipant {
        /// The identifier that appears more than once
        id: String,
    },

    /// Every remaining recipient is excluded for this participant
    #[error("No valid Secret Santa candidates available for employee {name} (ID: {id}).")]
    ConstraintViolation {
        /// Display name of the participant left without a recipient
        name: String,
        /// Identifier of the participant left without a recipient
        id: String,
    },
}

impl AssignmentError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::DuplicateParticipant { .. } => "duplicate_participant",
            Self::ConstraintViolation { .. } => "constraint_violation",
        }
    }

    /// A fresh random draw may succeed where this one failed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_violation_names_participant() {
        let err = AssignmentError::ConstraintViolation {
            name: "Alice".to_string(),
            id: "alice@example.com".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("No valid Secret Santa candidates available"));
        assert!(msg.contains("Alice"));
        assert!(msg.contains("alice@example.com"));
    }

    #[test]
    fn test_is_retryable() {
        let violation =
            AssignmentError::ConstraintViolation { name: "a".to_string(), id: "a".to_string() };
        let duplicate = AssignmentError::DuplicateParticipant { id: "a".to_string() };

        assert!(violation.is_retryable());
        assert!(!duplicate.is_retryable());
        assert!(!AssignmentError::EmptyInput.is_retryable());
    }
}
