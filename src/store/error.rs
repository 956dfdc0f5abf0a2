//! Donation store error types

use thiserror::Error;

/// Errors that can occur in the store layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// A draft failed validation and was not appended
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Validation("Missing required fields: donor".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: Missing required fields: donor"
        );
    }
}
