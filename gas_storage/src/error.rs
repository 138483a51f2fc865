//! Error types for the gas_storage crate

use chrono::NaiveDate;
use price_math::MathError;
use thiserror::Error;

/// Custom error types for the gas_storage crate
#[derive(Debug, Error)]
pub enum StorageError {
    /// Fitting cannot proceed on the given sample
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Requested volume does not fit in the storage facility
    #[error("Capacity exceeded: volume {volume} exceeds maximum storage {max_storage}")]
    CapacityExceeded { volume: f64, max_storage: f64 },

    /// Injection is not strictly before withdrawal
    #[error(
        "Invalid date order: injection date {injection_date} must be earlier than withdrawal date {withdrawal_date}"
    )]
    InvalidDateOrder {
        injection_date: NaiveDate,
        withdrawal_date: NaiveDate,
    },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error in the valuation configuration
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV reading or writing
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from JSON parsing
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, StorageError>;

impl From<MathError> for StorageError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DegenerateInput(msg) | MathError::InsufficientData(msg) => {
                StorageError::DegenerateInput(msg)
            }
            MathError::InvalidInput(msg) => StorageError::InvalidParameter(msg),
        }
    }
}

impl From<csv::Error> for StorageError {
    fn from(err: csv::Error) -> Self {
        StorageError::CsvError(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::JsonError(err.to_string())
    }
}
