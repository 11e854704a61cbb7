//! Error types for Opsdeck core operations

use thiserror::Error;

/// Errors raised when constructing or validating core entities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Percentage out of range: {value} (expected 0..=100)")]
    PercentOutOfRange { value: u16 },

    #[error("Record {record_id} has an empty {field}")]
    EmptyField {
        record_id: String,
        field: &'static str,
    },
}
