//! Document Store Tests
//!
//! Checks the seeded corpus and the ordering guarantees the retriever relies on.

#[cfg(test)]
mod tests {
    use crate::store::memory::{Document, DocumentStore};
    use std::collections::HashSet;

    #[test]
    fn test_seeded_store_has_five_documents() {
        let store = DocumentStore::seeded();

        assert_eq!(store.len(), 5);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_seeded_ids_are_unique_and_ordered() {
        let store = DocumentStore::seeded();

        let ids: Vec<u64> = store.iter().map(|doc| doc.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_seeded_content() {
        let store = DocumentStore::seeded();

        assert_eq!(
            store.documents()[2].content,
            "Kubernetes orchestrates containerized applications."
        );
    }

    #[test]
    fn test_custom_store_preserves_insertion_order() {
        let store = DocumentStore::new(vec![
            Document::new(42, "second in id, first in order"),
            Document::new(7, "first in id, second in order"),
        ]);

        assert_eq!(store.documents()[0].id, 42);
        assert_eq!(store.documents()[1].id, 7);
    }

    #[test]
    fn test_default_store_is_empty() {
        let store = DocumentStore::default();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
