use crate::search::engine::DEFAULT_TOP_K;
use crate::search::types::ScoredDocument;
use serde::{Deserialize, Serialize};

/// Per-run tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParams {
    /// Maximum number of documents the retriever returns. Values `<= 0` retrieve nothing.
    pub retriever_top_k: i64,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            retriever_top_k: DEFAULT_TOP_K,
        }
    }
}

/// An extracted answer and the score of the document it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub answer: String,
    pub score: f64,
}

/// Result of one pipeline run.
///
/// `answers` always holds exactly one entry; `documents` is the ranked retrieval
/// result the answer was extracted from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineOutput {
    pub answers: Vec<Answer>,
    pub documents: Vec<ScoredDocument>,
}

impl PipelineOutput {
    /// The single answer produced by the run.
    pub fn best_answer(&self) -> Option<&Answer> {
        self.answers.first()
    }
}
