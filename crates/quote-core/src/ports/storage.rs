//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use quote_types::{NewQuote, Quote};

/// Filter applied by [`QuoteStore::find_all`]
pub type QuotePredicate<'a> = &'a (dyn Fn(&Quote) -> bool + Send + Sync);

/// Quote store
///
/// Every method persists or reads through immediately. Ordering is the store's
/// natural insertion order.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn count(&self) -> Result<u64>;

    /// Validates the whole batch first; an invalid record means nothing is written.
    async fn insert_many(&self, quotes: Vec<NewQuote>) -> Result<Vec<Quote>>;

    async fn find_all(&self, predicate: QuotePredicate<'_>) -> Result<Vec<Quote>>;

    async fn find_one_at_offset(&self, offset: u64) -> Result<Option<Quote>>;
}
