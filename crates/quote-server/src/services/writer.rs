//! Quote creation

use quote_core::{NewQuote, Quote, QuoteError, QuoteStore, Result};
use std::sync::Arc;
use tracing::info;

pub struct QuoteWriter {
    store: Arc<dyn QuoteStore>,
}

impl QuoteWriter {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    pub async fn create_quote(&self, quote: NewQuote) -> Result<Quote> {
        quote.validate()?;

        let quote = self
            .store
            .insert_many(vec![quote])
            .await?
            .pop()
            .ok_or_else(|| QuoteError::Store("Insert returned no record".to_string()))?;

        info!("Created quote {} by {}", quote.id, quote.author);
        Ok(quote)
    }
}
