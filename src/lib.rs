//! Minimal Retrieval-Augmented Question Answering
//!
//! Answers questions from a small, fixed set of in-memory documents using keyword
//! overlap ranking and a sentence-picking heuristic. The library backs the HTTP
//! server binary (`main.rs`).
//!
//! ## Modules
//! - **`store`**: The read-only document store, seeded at startup.
//! - **`search`**: Keyword retrieval (`engine`) and answer extraction (`extractor`).
//! - **`pipeline`**: Retrieve-then-extract composition returning a scored answer.
//! - **`api`**: Axum router, handlers and JSON types for the REST surface.
//! - **`config`**: Bind address resolution.

pub mod api;
pub mod config;
pub mod pipeline;
pub mod search;
pub mod store;
