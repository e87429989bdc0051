//! Error types for the quote service

use quote_types::QuoteValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

pub const NO_QUOTES_AVAILABLE: &str = "No quotes available";
pub const NO_QUOTES_FOR_AUTHOR: &str = "No quotes found for this author";
pub const AUTHOR_REQUIRED: &str = "Author name is required";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Malformed or missing required input
    #[error("{0}")]
    Validation(String),

    /// No matching data
    #[error("{0}")]
    NotFound(String),

    /// Underlying persistence failure
    #[error("Store error: {0}")]
    Store(String),
}

impl QuoteError {
    pub fn no_quotes() -> Self {
        QuoteError::NotFound(NO_QUOTES_AVAILABLE.to_string())
    }

    pub fn no_quotes_for_author() -> Self {
        QuoteError::NotFound(NO_QUOTES_FOR_AUTHOR.to_string())
    }

    pub fn author_required() -> Self {
        QuoteError::Validation(AUTHOR_REQUIRED.to_string())
    }
}

impl From<QuoteValidationError> for QuoteError {
    fn from(e: QuoteValidationError) -> Self {
        QuoteError::Validation(format!("Quote validation failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err: QuoteError = QuoteValidationError::MissingAuthor.into();
        assert_eq!(
            err,
            QuoteError::Validation("Quote validation failed: author is required".to_string())
        );
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(QuoteError::no_quotes().to_string(), "No quotes available");
        assert_eq!(
            QuoteError::Store("disk I/O error".to_string()).to_string(),
            "Store error: disk I/O error"
        );
    }
}
