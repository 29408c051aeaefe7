//! # Error Types
//!
//! Structured error handling for the FoodShare data core. Store errors carry
//! the database's own message text so callers can surface it unmodified.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodShareError {
    /// Input rejected before any statement was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure reported by the store; the message is the store's own text.
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<sqlx::Error> for FoodShareError {
    fn from(err: sqlx::Error) -> Self {
        FoodShareError::Database(err.to_string())
    }
}

pub type Result<T, E = FoodShareError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = FoodShareError::Validation("provider name cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: provider name cannot be empty"
        );
    }

    #[test]
    fn sqlx_error_converts_to_database_error() {
        let err: FoodShareError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, FoodShareError::Database(_)));
    }
}
