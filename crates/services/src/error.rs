//! Shared error types for the services crate.

use thiserror::Error;

use coinflip_core::model::CalculationError;
use storage::repository::StorageError;

use crate::input::InputField;

/// Text shown in the blocking alert for any rejected submission.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please check your numbers.";

/// Reasons a form submission is rejected before any calculation runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInputError {
    #[error("{field} is not a whole number: {raw:?}")]
    NotAnInteger { field: InputField, raw: String },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: InputField, value: i64 },

    #[error("coin flips must be at least 1, got {coins}")]
    CoinsBelowOne { coins: i64 },

    #[error("heads cannot be negative, got {heads}")]
    NegativeHeads { heads: i64 },

    #[error("heads ({heads}) cannot exceed coin flips ({coins})")]
    HeadsExceedCoins { heads: i64, coins: i64 },
}

impl InvalidInputError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// Errors emitted by `CalculatorService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CalculatorError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CalculatorError {
    /// True when the user can fix the problem by editing the form.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Calculation(_))
    }
}
