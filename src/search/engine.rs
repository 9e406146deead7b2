use super::tokenizer::query_words;
use super::types::ScoredDocument;
use crate::store::memory::DocumentStore;

/// Number of results returned when the caller does not ask for a specific amount.
pub const DEFAULT_TOP_K: i64 = 3;

/// Scores every document against `query` and returns the best `top_k`.
///
/// A document's score is the fraction of query words (duplicates included) that
/// occur as a substring of its lower-cased content. Documents scoring zero are
/// dropped, the rest are sorted by score descending with ties left in store order.
/// A query with no words scores every document zero, and `top_k <= 0` returns
/// nothing.
pub fn search(store: &DocumentStore, query: &str, top_k: i64) -> Vec<ScoredDocument> {
    let words = query_words(query);
    let limit = usize::try_from(top_k).unwrap_or(0);
    if words.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut results: Vec<ScoredDocument> = store
        .iter()
        .filter_map(|doc| {
            let content = doc.content.to_lowercase();
            let hits = words
                .iter()
                .filter(|word| content.contains(word.as_str()))
                .count();
            if hits == 0 {
                return None;
            }
            Some(ScoredDocument::from_document(
                doc,
                hits as f64 / words.len() as f64,
            ))
        })
        .collect();

    // sort_by is stable, so equal scores keep store order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);
    results
}
