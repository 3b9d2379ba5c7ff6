//! Text helpers shared by the term extractor and the composer.
//!
//! All lengths here count Unicode scalar values, never bytes, so Japanese
//! text is cut on character boundaries.

use crate::core::models::Document;

/// Only the first documents in caller order contribute to a summary.
pub const MAX_DOCUMENTS: usize = 10;

/// Upper bound on sentences collected from the combined text.
pub const MAX_SENTENCES: usize = 15;

/// Sentences at or below this many characters are dropped.
pub const MIN_SENTENCE_CHARS: usize = 10;

const SENTENCE_TERMINATORS: [char; 4] = ['。', '！', '？', '\n'];

/// Joins the first [`MAX_DOCUMENTS`] documents as `【title】\ncontent`
/// blocks separated by a blank line.
#[must_use]
pub fn combine_documents(documents: &[Document]) -> String {
    documents
        .iter()
        .take(MAX_DOCUMENTS)
        .map(|doc| format!("【{}】\n{}", doc.title, doc.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Splits on sentence-final punctuation and newlines, keeping trimmed
/// pieces longer than [`MIN_SENTENCE_CHARS`], in order, capped at
/// [`MAX_SENTENCES`].
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .take(MAX_SENTENCES)
        .map(str::to_string)
        .collect()
}

/// Whitespace-separated query tokens longer than one character.
///
/// Full-width spaces (U+3000) count as whitespace.
#[must_use]
pub fn query_terms(query: &str) -> Vec<&str> {
    query
        .split_whitespace()
        .filter(|term| term.chars().count() > 1)
        .collect()
}

/// Returns the first `max_chars` characters of `text`.
#[must_use]
pub fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
