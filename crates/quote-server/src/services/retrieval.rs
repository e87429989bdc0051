//! Random quote retrieval

use quote_core::{Quote, QuoteError, QuoteStore, Result};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

pub struct RetrievalService {
    store: Arc<dyn QuoteStore>,
}

impl RetrievalService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// Pick one stored quote, each with probability `1/count`.
    pub async fn random_quote(&self) -> Result<Quote> {
        let count = self.store.count().await?;
        if count == 0 {
            return Err(QuoteError::no_quotes());
        }

        let offset = {
            let mut rng = rand::thread_rng();
            pick_offset(&mut rng, count)
        };
        debug!("Serving quote at offset {} of {}", offset, count);

        // The record may have been removed between count and fetch.
        self.store
            .find_one_at_offset(offset)
            .await?
            .ok_or_else(QuoteError::no_quotes)
    }
}

/// Uniform offset in `[0, count)`. `count` must be non-zero.
pub fn pick_offset<R: Rng + ?Sized>(rng: &mut R, count: u64) -> u64 {
    rng.gen_range(0..count)
}
