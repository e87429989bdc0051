//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quote_core::QuoteError;
use serde_json::json;
use thiserror::Error;

/// Error returned by API handlers, rendered as `{"message": ...}`
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] QuoteError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            QuoteError::Validation(_) => StatusCode::BAD_REQUEST,
            QuoteError::NotFound(_) => StatusCode::NOT_FOUND,
            QuoteError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(json!({
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
