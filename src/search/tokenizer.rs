/// Delimiter used to split document content into sentences.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Lower-cases the query and splits it on whitespace.
///
/// Duplicates are kept and no punctuation is stripped: `"What is Kubernetes?"`
/// yields `["what", "is", "kubernetes?"]`.
pub fn query_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Splits text on the literal `". "` delimiter.
///
/// A trailing period without a following space stays attached to the last
/// sentence, and empty text yields a single empty sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITER).collect()
}
