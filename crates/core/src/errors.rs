//! Core error types for the AssetDeck pipeline.
//!
//! This module defines store-agnostic error types. Storage- and
//! platform-specific errors are converted to these types by the adapters.

use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the asset list core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Asset operation failed: {0}")]
    Asset(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Valuation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Store operation failed: {0}")]
    Store(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors that occur during valuation calculations.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid asset data: {0}")]
    InvalidAsset(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
