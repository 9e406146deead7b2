use crate::store::memory::Document;
use serde::{Deserialize, Serialize};

/// A document paired with its relevance score for one query.
///
/// Built fresh for every search and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredDocument {
    pub id: u64,
    pub content: String,
    pub score: f64,
}

impl ScoredDocument {
    pub fn from_document(document: &Document, score: f64) -> Self {
        Self {
            id: document.id,
            content: document.content.clone(),
            score,
        }
    }
}
