//! Liveness check backed by a store query

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use quote_core::QuoteStore;
use serde_json::{json, Value};

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.db.count().await {
        Ok(quotes) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "quotes": quotes })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "message": e.to_string() })),
            )
        }
    }
}
