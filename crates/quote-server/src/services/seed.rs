//! Default quotes for a fresh store

use quote_core::{NewQuote, QuoteStore, Result};
use tracing::info;

pub const DEFAULT_QUOTES: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
    ),
    ("Stay hungry, stay foolish.", "Steve Jobs"),
    (
        "Your time is limited, so don't waste it living someone else's life.",
        "Steve Jobs",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
];

/// Insert [`DEFAULT_QUOTES`] when the store is empty.
///
/// Returns the number of quotes inserted, which is zero for a store that already
/// holds data. Only the count is consulted, never the content.
pub async fn seed_if_empty(store: &dyn QuoteStore) -> Result<usize> {
    let count = store.count().await?;
    if count > 0 {
        info!("Store already holds {} quotes, skipping seed", count);
        return Ok(0);
    }

    let defaults = DEFAULT_QUOTES
        .iter()
        .map(|(text, author)| NewQuote::new(*text, *author))
        .collect();
    let inserted = store.insert_many(defaults).await?;

    info!("Default quotes added to database: {}", inserted.len());
    Ok(inserted.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[tokio::test]
    async fn test_seeds_empty_store_once() -> anyhow::Result<()> {
        let db = Database::in_memory().await?;

        assert_eq!(seed_if_empty(&db).await?, DEFAULT_QUOTES.len());
        assert_eq!(db.count().await?, 5);

        assert_eq!(seed_if_empty(&db).await?, 0);
        assert_eq!(db.count().await?, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_non_empty_store_is_left_alone() -> anyhow::Result<()> {
        let db = Database::in_memory().await?;
        db.insert_many(vec![NewQuote::new("Mine", "Me")]).await?;

        assert_eq!(seed_if_empty(&db).await?, 0);
        assert_eq!(db.count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_restart_does_not_duplicate() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}", temp_dir.path().join("quotes.db").display());

        let first = Database::connect(&url).await?;
        seed_if_empty(&first).await?;
        first.close().await;

        let second = Database::connect(&url).await?;
        assert_eq!(seed_if_empty(&second).await?, 0);
        assert_eq!(second.count().await?, 5);
        second.close().await;
        Ok(())
    }
}
