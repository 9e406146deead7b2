//! API error types mapped to HTTP status codes.
//!
//! Errors render as a JSON body `{"error": "message"}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as the expected JSON shape.
    ///
    /// Keeps axum's status: 400 for malformed JSON, 415 for a missing
    /// `Content-Type`, 422 for missing fields or wrong types.
    InvalidBody { status: StatusCode, message: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidBody { status, message } => (status, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
