//! Quote types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Quote creation request
///
/// Missing fields deserialize as empty strings so they surface as validation
/// failures instead of body parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
}

/// Reasons a [`NewQuote`] cannot be stored
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteValidationError {
    #[error("text is required")]
    MissingText,

    #[error("author is required")]
    MissingAuthor,
}

impl NewQuote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Check required fields. Whitespace-only values count as empty.
    pub fn validate(&self) -> Result<(), QuoteValidationError> {
        if self.text.trim().is_empty() {
            return Err(QuoteValidationError::MissingText);
        }
        if self.author.trim().is_empty() {
            return Err(QuoteValidationError::MissingAuthor);
        }
        Ok(())
    }

    /// Validate and turn into a storable quote with a fresh id and timestamp
    pub fn into_quote(self) -> Result<Quote, QuoteValidationError> {
        self.validate()?;

        Ok(Quote {
            id: uuid::Uuid::now_v7().to_string(),
            text: self.text.trim().to_string(),
            author: self.author.trim().to_string(),
            created_at: Utc::now(),
        })
    }
}
