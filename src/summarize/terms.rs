//! Frequency-based keyword extraction.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::text::query_terms;
use crate::errors::SummaryError;

/// Maximum number of keywords returned.
pub const MAX_KEY_TERMS: usize = 5;

/// A word must occur more than this many times to be a keyword.
pub const MIN_TERM_OCCURRENCES: usize = 2;

// Hiragana, Katakana, CJK ideographs and ASCII word characters; runs of 3+.
static WORD_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"[\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}A-Za-z0-9_]{3,}")
});

/// Word counts that remember first-seen order.
///
/// Ties in the final ranking fall back to this order, so it must not be
/// replaced with a plain hash map.
#[derive(Debug, Default)]
struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    fn record(&mut self, word: String) {
        if let Some(&pos) = self.index.get(&word) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(word.clone(), self.entries.len());
            self.entries.push((word, 1));
        }
    }

    fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }
}

/// Ranks frequent words in `combined_text`, skipping query terms.
///
/// Words are lowercased before counting, but the exclusion check compares
/// against the query tokens as typed, so `Rust` in the query does not
/// exclude the keyword `rust`.
///
/// # Errors
///
/// Returns [`SummaryError::InternalFailure`] if the word pattern cannot be
/// compiled.
pub fn extract_key_terms(query: &str, combined_text: &str) -> Result<Vec<String>, SummaryError> {
    let word_re = (*WORD_RE).as_ref().map_err(|e| SummaryError::from(e.clone()))?;
    let excluded = query_terms(query);

    let mut table = FrequencyTable::default();
    for m in word_re.find_iter(combined_text) {
        table.record(m.as_str().to_lowercase());
    }

    let mut ranked: Vec<(String, usize)> = table
        .into_entries()
        .into_iter()
        .filter(|(word, count)| *count > MIN_TERM_OCCURRENCES && !excluded.contains(&word.as_str()))
        .collect();

    // sort_by is stable: equal counts keep first-seen order
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));

    Ok(ranked
        .into_iter()
        .take(MAX_KEY_TERMS)
        .map(|(word, _)| word)
        .collect())
}
