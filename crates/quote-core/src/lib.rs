//! Quote Core Library
//!
//! Error taxonomy and storage port shared by the quote services.

// Re-export pure types from quote-types
pub use quote_types::*;

pub mod error;
pub mod ports;

pub use error::{QuoteError, Result};
pub use ports::QuoteStore;
