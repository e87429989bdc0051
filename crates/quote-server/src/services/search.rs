//! Author search

use quote_core::{Quote, QuoteError, QuoteStore, Result};
use std::sync::Arc;
use tracing::debug;

pub struct SearchService {
    store: Arc<dyn QuoteStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// All quotes whose author contains `author`, ignoring case, in store order.
    ///
    /// The input is matched as literal text; characters such as `.` or `%` have
    /// no special meaning.
    pub async fn search_by_author(&self, author: Option<&str>) -> Result<Vec<Quote>> {
        // Blank input is missing input; anything else is matched as given.
        let needle = match author {
            Some(a) if !a.trim().is_empty() => a.to_lowercase(),
            _ => return Err(QuoteError::author_required()),
        };

        debug!("Searching quotes by author: {:?}", needle);

        let matches = self
            .store
            .find_all(&|quote: &Quote| author_matches(&quote.author, &needle))
            .await?;

        if matches.is_empty() {
            return Err(QuoteError::no_quotes_for_author());
        }

        Ok(matches)
    }
}

/// `needle` must already be lower-cased.
fn author_matches(author: &str, needle: &str) -> bool {
    author.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use quote_core::NewQuote;

    async fn service() -> anyhow::Result<SearchService> {
        let db = Database::in_memory().await?;
        db.insert_many(vec![
            NewQuote::new("Stay hungry, stay foolish.", "Steve Jobs"),
            NewQuote::new("The future belongs to dreamers.", "Eleanor Roosevelt"),
            NewQuote::new("Innovation distinguishes leaders.", "Steve Jobs"),
            NewQuote::new("Simplicity is the ultimate sophistication.", "Leonardo da Vinci"),
            NewQuote::new("Less is more (usually).", "Ludwig Mies van der Rohe"),
        ])
        .await?;
        Ok(SearchService::new(Arc::new(db)))
    }

    #[tokio::test]
    async fn test_missing_author_is_validation_error() -> anyhow::Result<()> {
        let service = service().await?;

        for input in [None, Some(""), Some("   ")] {
            let err = service.search_by_author(input).await.unwrap_err();
            assert_eq!(
                err,
                QuoteError::Validation("Author name is required".to_string())
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_case_insensitive_substring() -> anyhow::Result<()> {
        let service = service().await?;

        let quotes = service.search_by_author(Some("steve")).await?;
        let texts: Vec<_> = quotes.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "Stay hungry, stay foolish.",
                "Innovation distinguishes leaders."
            ]
        );

        // Unanchored: matches inside the field
        let quotes = service.search_by_author(Some("OSEVE")).await?;
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].author, "Eleanor Roosevelt");
        Ok(())
    }

    #[tokio::test]
    async fn test_returns_every_match_and_no_others() -> anyhow::Result<()> {
        let service = service().await?;

        // "eo" occurs only in "Leonardo"
        let quotes = service.search_by_author(Some("eo")).await?;
        let authors: Vec<_> = quotes.iter().map(|q| q.author.as_str()).collect();
        assert_eq!(authors, ["Leonardo da Vinci"]);

        let quotes = service.search_by_author(Some("e")).await?;
        assert_eq!(quotes.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_no_match_is_not_found() -> anyhow::Result<()> {
        let service = service().await?;

        let err = service.search_by_author(Some("Shakespeare")).await.unwrap_err();
        assert_eq!(
            err,
            QuoteError::NotFound("No quotes found for this author".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_part_of_needle() -> anyhow::Result<()> {
        let service = service().await?;

        let err = service.search_by_author(Some("Jobs ")).await.unwrap_err();
        assert_eq!(err, QuoteError::no_quotes_for_author());

        // An inner space still matches the space inside the author
        let quotes = service.search_by_author(Some("eve j")).await?;
        assert_eq!(quotes.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_metacharacters_are_literal() -> anyhow::Result<()> {
        let service = service().await?;

        for pattern in ["J.bs", ".*", "St%", "S_eve", "(", "[a-z]"] {
            assert!(
                service.search_by_author(Some(pattern)).await.is_err(),
                "{} should not match anything",
                pattern
            );
        }
        Ok(())
    }

    #[test]
    fn test_author_matches() {
        assert!(author_matches("Steve Jobs", "steve"));
        assert!(author_matches("ÉMILE ZOLA", "émile"));
        assert!(!author_matches("Steve Jobs", "steve  jobs"));
    }
}
