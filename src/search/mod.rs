//! Search Module
//!
//! Keyword retrieval and answer extraction over the in-memory document store.
//!
//! ## Overview
//! Both stages are pure functions: they read the store (or a ranked result list)
//! and return freshly built values, so they are safe to call from any number of
//! requests at once.
//!
//! ## Submodules
//! - **`tokenizer`**: Query word splitting and the naive `". "` sentence splitter.
//! - **`engine`**: Scores every document by query word overlap and returns the top-K.
//! - **`extractor`**: Picks a single answer sentence out of the best ranked document.
//! - **`types`**: Ranked result types.

pub mod engine;
pub mod extractor;
pub mod tokenizer;
pub mod types;
