//! Table ingestion errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while turning uploaded CSV bytes into records.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum IngestError {
    /// The table has no content or no data rows
    #[error("The provided CSV file is empty and cannot be processed.")]
    EmptyInput,

    /// Required header fields are absent
    #[error("The CSV file is missing the following required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Missing column names, in schema order
        columns: Vec<String>,
    },

    /// A data row has an empty value in a required field
    #[error("Row {row} has an empty {column} value")]
    BlankField {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Name of the blank column
        column: String,
    },

    /// Two data rows share the same identifier
    #[error("Duplicate participant ID '{id}' at row {row}")]
    DuplicateParticipant {
        /// The repeated identifier
        id: String,
        /// 1-based data row number of the second occurrence
        row: usize,
    },

    /// Bytes are not UTF-8 or not valid CSV
    #[error("Could not read CSV data: {message}")]
    Malformed {
        /// Decoder message
        message: String,
    },
}

impl IngestError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::MissingColumns { .. } | Self::BlankField { .. } => "schema_violation",
            Self::DuplicateParticipant { .. } => "duplicate_participant",
            Self::Malformed { .. } => "malformed",
        }
    }

    pub fn malformed(e: impl std::fmt::Display) -> Self {
        Self::Malformed { message: e.to_string() }
    }
}
