//! Question Answering Pipeline
//!
//! Composes retrieval and answer extraction into a single call.
//!
//! ## Flow
//! 1. **Retrieve**: Rank the store's documents against the query (`search::engine`).
//! 2. **Extract**: Pull an answer sentence from the best document (`search::extractor`).
//! 3. **Assemble**: Pair the answer with the top retrieval score (0.0 when nothing matched).
//!
//! A `Pipeline` is built once at startup and handed to the HTTP layer; it holds no
//! mutable state, so one instance serves every request.

pub mod service;
pub mod types;
