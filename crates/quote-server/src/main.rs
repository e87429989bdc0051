//! Quote of the Day Server
//!
//! Serves a random quote and author search over a small SQLite-backed quote
//! collection, plus an optional pre-built single-page client.

mod config;
mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use services::{seed_if_empty, QuoteWriter, RetrievalService, SearchService};
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub retrieval: Arc<RetrievalService>,
    pub search: Arc<SearchService>,
    pub writer: Arc<QuoteWriter>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            retrieval: Arc::new(RetrievalService::new(db.clone())),
            search: Arc::new(SearchService::new(db.clone())),
            writer: Arc::new(QuoteWriter::new(db.clone())),
            db,
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Quote Server v{}", env!("CARGO_PKG_VERSION"));
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}",
        config.bind_address(),
        config.database_url
    );

    // A store we cannot reach is fatal
    let db = Arc::new(
        Database::connect(&config.database_url)
            .await
            .context("Failed to initialize database")?,
    );

    match seed_if_empty(db.as_ref()).await {
        Ok(0) => {}
        Ok(n) => info!("Seeded store with {} default quotes", n),
        Err(e) => error!("Error initializing quotes: {}", e),
    }

    let state = AppState::new(db.clone());

    if let Some(dir) = &config.static_dir {
        info!("Static files directory: {}", dir.display());
    }
    let router = app(state, config.static_dir.as_deref());

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Closing database connections");
    db.close().await;

    Ok(())
}

fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // REST API routes
        .nest("/api", api_routes());

    // SPA fallback - unknown paths serve index.html
    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).not_found_service(index));
    }

    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/quote",
            get(handlers::quotes::random).post(handlers::quotes::create),
        )
        .route("/quotes/search", get(handlers::quotes::search))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
