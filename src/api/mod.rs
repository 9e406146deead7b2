//! HTTP API Module
//!
//! Exposes the question answering pipeline over a small JSON REST surface.
//!
//! ## Endpoints
//! - `GET /`: Welcome message pointing at the endpoint listing.
//! - `GET /health`: Liveness check.
//! - `GET /docs`: Machine-readable list of the served endpoints.
//! - `POST /query`: Runs the pipeline for a question and returns one answer.
//!
//! The pipeline is injected as an `Extension<Arc<Pipeline>>`, so every handler works
//! on the same immutable instance built at startup.

pub mod errors;
pub mod handlers;
pub mod protocol;


use crate::pipeline::service::Pipeline;
use axum::routing::{get, post};
use axum::{Extension, Router};
use handlers::{handle_docs, handle_health, handle_query, handle_root};
use protocol::{ENDPOINT_DOCS, ENDPOINT_HEALTH, ENDPOINT_QUERY, ENDPOINT_ROOT};
use std::sync::Arc;

/// Builds the application router around a shared pipeline.
pub fn create_router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route(ENDPOINT_ROOT, get(handle_root))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_DOCS, get(handle_docs))
        .route(ENDPOINT_QUERY, post(handle_query))
        .layer(Extension(pipeline))
}
