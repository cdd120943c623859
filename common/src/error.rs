//! # Dealer Errors
//!
//! The failure modes of a showroom run. Every operation not listed here is
//! total, so any of these aborts the walkthrough.

use thiserror::Error;

/// Placeholder shown when stdin ran out before a prompt was answered.
pub const END_OF_INPUT: &str = "<end of input>";

#[derive(Debug, Error)]
pub enum DealerError {
    /// A prompted value was missing or could not be parsed as the expected type.
    #[error("invalid input for {field}: {value:?}")]
    InvalidInput { field: String, value: String },

    /// Character access past the end of a brand name.
    #[error("index {index} is out of range for a brand of {len} characters")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl DealerError {
    pub fn invalid_input(field: &str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn end_of_input(field: &str) -> Self {
        Self::invalid_input(field, END_OF_INPUT)
    }
}
