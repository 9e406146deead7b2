use super::types::{Answer, PipelineOutput, RunParams};
use crate::search::engine::search;
use crate::search::extractor::extract_answer;
use crate::store::memory::DocumentStore;

/// Retrieve-then-extract question answering over an immutable document store.
#[derive(Debug, Clone)]
pub struct Pipeline {
    store: DocumentStore,
}

impl Pipeline {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Runs retrieval and answer extraction for a single query.
    pub fn run(&self, query: &str, params: RunParams) -> PipelineOutput {
        let documents = search(&self.store, query, params.retriever_top_k);
        let answer = extract_answer(query, &documents);
        let score = documents.first().map(|doc| doc.score).unwrap_or(0.0);

        tracing::debug!(
            "Pipeline run: {} documents retrieved, answer score {:.3}",
            documents.len(),
            score
        );

        PipelineOutput {
            answers: vec![Answer { answer, score }],
            documents,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DocumentStore::seeded())
    }
}
