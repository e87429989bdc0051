//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use quote_core::ports::QuotePredicate;
use quote_core::{NewQuote, Quote, QuoteError, QuoteStore};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// Open (or create) the store behind `database_url` and run migrations.
    ///
    /// Accepts `sqlite://path/to/file.db`, `sqlite:file.db` and `sqlite::memory:`.
    pub async fn connect(database_url: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_url);

        let in_memory = is_in_memory(database_url);

        if let Some(parent) = database_file(database_url).and_then(|p| p.parent()) {
            if !parent.as_os_str().is_empty() {
                tracing::info!("Creating parent directory: {}", parent.display());
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let mut options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        let pool_options = if in_memory {
            // Every connection to :memory: is a separate database, so pin one.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database at: {}", database_url))?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Fresh, private in-memory store.
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // seq fixes the natural (insertion) order used for offsets
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                text TEXT NOT NULL CHECK (length(trim(text)) > 0),
                author TEXT NOT NULL CHECK (length(trim(author)) > 0),
                created_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Release all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuoteStore for Database {
    async fn count(&self) -> quote_core::Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
            .fetch_one(&*self.pool)
            .await
            .map_err(store_error)?;

        Ok(count.max(0) as u64)
    }

    async fn insert_many(&self, quotes: Vec<NewQuote>) -> quote_core::Result<Vec<Quote>> {
        let quotes = quotes
            .into_iter()
            .map(NewQuote::into_quote)
            .collect::<Result<Vec<_>, _>>()?;

        let mut tx = self.pool.begin().await.map_err(store_error)?;

        for quote in &quotes {
            sqlx::query(
                r#"
                INSERT INTO quotes (id, text, author, created_at)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&quote.id)
            .bind(&quote.text)
            .bind(&quote.author)
            .bind(quote.created_at)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;
        }

        tx.commit().await.map_err(store_error)?;

        Ok(quotes)
    }

    async fn find_all(&self, predicate: QuotePredicate<'_>) -> quote_core::Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, text, author, created_at
            FROM quotes
            ORDER BY seq
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(Quote::from)
            .filter(|q| predicate(q))
            .collect())
    }

    async fn find_one_at_offset(&self, offset: u64) -> quote_core::Result<Option<Quote>> {
        let offset = i64::try_from(offset)
            .map_err(|_| QuoteError::Store(format!("Offset out of range: {}", offset)))?;

        let row: Option<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, text, author, created_at
            FROM quotes
            ORDER BY seq
            LIMIT 1 OFFSET ?1
            "#,
        )
        .bind(offset)
        .fetch_optional(&*self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(|r| r.into()))
    }
}

fn store_error(e: sqlx::Error) -> QuoteError {
    QuoteError::Store(e.to_string())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Filesystem path of a file-backed SQLite URL, `None` for in-memory stores.
fn database_file(database_url: &str) -> Option<&Path> {
    if is_in_memory(database_url) {
        return None;
    }

    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() {
        None
    } else {
        Some(Path::new(path))
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: String,
    text: String,
    author: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<QuoteRow> for Quote {
    fn from(r: QuoteRow) -> Self {
        Quote {
            id: r.id,
            text: r.text,
            author: r.author,
            created_at: r.created_at,
        }
    }
}
