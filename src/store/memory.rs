use serde::{Deserialize, Serialize};

/// A single text document with a numeric identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: u64,
    pub content: String,
}

impl Document {
    pub fn new(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

/// Read-only, ordered collection of documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Builds a store from an explicit document list, keeping its order.
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// The built-in demo corpus served by the HTTP API.
    pub fn seeded() -> Self {
        Self::new(vec![
            Document::new(
                1,
                "Haystack is an open-source framework for building RAG pipelines.",
            ),
            Document::new(2, "FastAPI is a modern Python web framework for APIs."),
            Document::new(3, "Kubernetes orchestrates containerized applications."),
            Document::new(
                4,
                "Docker is a containerization platform for packaging applications.",
            ),
            Document::new(
                5,
                "Python is a popular programming language for AI and web development.",
            ),
        ])
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
