//! Quote handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use quote_core::{NewQuote, Quote, QuoteError};
use serde::Deserialize;
use tracing::debug;

/// `GET /api/quote`
pub async fn random(State(state): State<AppState>) -> Result<Json<Quote>, ApiError> {
    let quote = state.retrieval.random_quote().await?;
    Ok(Json(quote))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    author: Option<String>,
}

/// `GET /api/quotes/search?author=...`
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let Query(params) = params.map_err(|e| QuoteError::Validation(e.body_text()))?;

    let quotes = state
        .search
        .search_by_author(params.author.as_deref())
        .await?;

    debug!("Author search returned {} quotes", quotes.len());
    Ok(Json(quotes))
}

/// `POST /api/quote`
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewQuote>, JsonRejection>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let Json(new_quote) = payload.map_err(|e| QuoteError::Validation(e.body_text()))?;

    let quote = state.writer.create_quote(new_quote).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}
