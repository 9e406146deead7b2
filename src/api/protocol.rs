//! API Protocol
//!
//! Endpoint paths and the JSON Data Transfer Objects (DTOs) exchanged with clients.

use crate::pipeline::types::Answer;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Welcome endpoint.
pub const ENDPOINT_ROOT: &str = "/";
/// Liveness check.
pub const ENDPOINT_HEALTH: &str = "/health";
/// Endpoint listing.
pub const ENDPOINT_DOCS: &str = "/docs";
/// Question answering.
pub const ENDPOINT_QUERY: &str = "/query";

/// Service name reported by the informational endpoints.
pub const SERVICE_NAME: &str = "Minimal RAG API";

/// Number of documents retrieved when a query omits `top_k`.
pub const DEFAULT_QUERY_TOP_K: i64 = 2;

fn default_top_k() -> i64 {
    DEFAULT_QUERY_TOP_K
}

// --- Data Transfer Objects ---

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    /// Maximum documents to retrieve. Zero or negative values retrieve nothing.
    #[serde(default = "default_top_k")]
    pub top_k: i64,
}

/// Response of `POST /query`. Carries exactly one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub question: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub docs: String,
}

/// One row of the `GET /docs` listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocsResponse {
    pub title: String,
    pub endpoints: Vec<EndpointInfo>,
}
