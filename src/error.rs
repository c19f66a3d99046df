use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::market_data::VALID_INTERVALS;
use crate::models::AVAILABLE_ROUTES;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Symbol parameter is required")]
    MissingSymbol,
    #[error("Keywords parameter is required. Example: /company-search?keywords=microsoft")]
    MissingKeywords,
    #[error("Invalid interval. Valid intervals: {}", VALID_INTERVALS.join(", "))]
    InvalidInterval,
    // `category` is the caller-facing "Failed to fetch ..." string; the
    // underlying cause is surfaced in `message` to help debugging
    #[error("{category}")]
    Upstream {
        category: &'static str,
        message: String,
    },
    #[error("Route not found")]
    NotFound,
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingSymbol | ApiError::MissingKeywords | ApiError::InvalidInterval => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ApiError::Upstream { category, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": category, "message": message }),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Route not found", "availableRoutes": AVAILABLE_ROUTES }),
            ),
            ApiError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "message": err.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
