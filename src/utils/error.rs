use axum::{http::StatusCode, response::{Html, IntoResponse, Response}, Json};
use serde::Serialize;
use thiserror::Error;

use crate::models::quote::QuoteError;
use crate::views;

/// Failure talking to the content store. Never shown to visitors: callers
/// substitute demo content or an unavailable message.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("status {status} from content store")]
    Status { status: u16 },
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("not_found: {0}")]
    NotFound(String),
}

impl From<QuoteError> for ApiError {
    fn from(e: QuoteError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")] pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: "Validation failed", details: Some(msg) }),
            ).into_response(),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Html(views::not_found::render()),
            ).into_response(),
        }
    }
}
