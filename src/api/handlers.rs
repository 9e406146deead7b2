use super::errors::ApiError;
use super::protocol::*;
use crate::pipeline::service::Pipeline;
use crate::pipeline::types::RunParams;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

pub async fn handle_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {}", SERVICE_NAME),
        docs: ENDPOINT_DOCS.to_string(),
    })
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: format!("{} is running", SERVICE_NAME),
    })
}

pub async fn handle_docs() -> Json<DocsResponse> {
    let endpoint = |method: &str, path: &str, summary: &str| EndpointInfo {
        method: method.to_string(),
        path: path.to_string(),
        summary: summary.to_string(),
    };

    Json(DocsResponse {
        title: SERVICE_NAME.to_string(),
        endpoints: vec![
            endpoint("GET", ENDPOINT_ROOT, "Welcome message"),
            endpoint("GET", ENDPOINT_HEALTH, "Health check"),
            endpoint("GET", ENDPOINT_DOCS, "This endpoint listing"),
            endpoint(
                "POST",
                ENDPOINT_QUERY,
                "Answer a question: {\"question\": string, \"top_k\": integer = 2}",
            ),
        ],
    })
}

pub async fn handle_query(
    Extension(pipeline): Extension<Arc<Pipeline>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!("[{}] Rejected query body: {}", request_id, rejection.body_text());
        ApiError::from(rejection)
    })?;

    tracing::info!(
        "[{}] Query {:?} (top_k={})",
        request_id,
        req.question,
        req.top_k
    );

    let output = pipeline.run(
        &req.question,
        RunParams {
            retriever_top_k: req.top_k,
        },
    );

    tracing::info!(
        "[{}] Retrieved {} documents, answer score {:.3}",
        request_id,
        output.documents.len(),
        output.best_answer().map(|a| a.score).unwrap_or(0.0)
    );

    Ok(Json(QueryResponse {
        question: req.question,
        answers: output.answers,
    }))
}
