use super::tokenizer::{query_words, split_sentences};
use super::types::ScoredDocument;

/// Returned when there is no document to extract an answer from.
pub const NO_ANSWER: &str = "I couldn't find a relevant answer.";

/// Picks an answer sentence from the first (best ranked) document.
///
/// Returns the first sentence containing any query word as a case-insensitive
/// substring, falling back to the first sentence. Only `documents[0]` is inspected.
pub fn extract_answer(query: &str, documents: &[ScoredDocument]) -> String {
    let Some(best) = documents.first() else {
        return NO_ANSWER.to_string();
    };

    let words = query_words(query);
    let sentences = split_sentences(&best.content);

    sentences
        .iter()
        .find(|sentence| {
            let lowered = sentence.to_lowercase();
            words.iter().any(|word| lowered.contains(word.as_str()))
        })
        .or_else(|| sentences.first())
        .map(|sentence| sentence.trim().to_string())
        .unwrap_or_default()
}
