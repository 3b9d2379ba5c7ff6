//! Extractive summary composition.
//!
//! Builds the fixed-structure report: header, keyword line, numbered key
//! points, an optional line of further sentences and a dated footer, capped
//! at [`MAX_SUMMARY_CHARS`] characters.

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::terms::extract_key_terms;
use super::text::{split_sentences, take_chars};
use crate::core::config::AppConfig;
use crate::errors::SummaryError;

/// Hard cap on the returned summary, in characters.
pub const MAX_SUMMARY_CHARS: usize = 500;

/// Marker appended when the summary or a key point is cut short.
pub const ELLIPSIS: &str = "...";

/// Longest key point shown before it is cut.
pub const MAX_POINT_CHARS: usize = 150;

/// Sentences shown as numbered key points.
pub const KEY_POINT_COUNT: usize = 5;

/// Sentences (after the key points) listed in the closing line.
pub const EXTRA_SENTENCE_COUNT: usize = 5;

/// A summarization backend.
///
/// `ExtractiveSummarizer` is the only backend today; a model-based one can
/// be swapped in behind the same call.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `combined_text` for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::InternalFailure`] when text processing fails.
    async fn summarize(&self, query: &str, combined_text: &str) -> Result<String, SummaryError>;
}

/// Sentence-extraction summarizer dated by an injected clock.
#[derive(Clone)]
pub struct ExtractiveSummarizer {
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl ExtractiveSummarizer {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self { clock, timezone }
    }

    /// Wall-clock summarizer using the configured time zone.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(SystemClock), config.summary_timezone)
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.timezone).date_naive()
    }
}

impl std::fmt::Debug for ExtractiveSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractiveSummarizer")
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(&self, query: &str, combined_text: &str) -> Result<String, SummaryError> {
        compose_summary(query, combined_text, self.today())
    }
}

/// Composes the summary for `query` from `combined_text`, dated `date`.
///
/// # Errors
///
/// Returns [`SummaryError::InternalFailure`] if keyword extraction or date
/// formatting fails.
pub fn compose_summary(
    query: &str,
    combined_text: &str,
    date: NaiveDate,
) -> Result<String, SummaryError> {
    let sentences = split_sentences(combined_text);
    let key_terms = extract_key_terms(query, combined_text)?;
    debug!(
        sentences = sentences.len(),
        key_terms = key_terms.len(),
        "Composing extractive summary"
    );

    let mut out = String::new();
    write_summary(&mut out, query, &sentences, &key_terms, date)
        .map_err(|e| SummaryError::InternalFailure(format!("failed to format summary: {e}")))?;

    #[cfg(feature = "debug-logs")]
    tracing::info!("Composed summary:\n{}", out);

    Ok(cap_length(out))
}

fn write_summary(
    out: &mut String,
    query: &str,
    sentences: &[String],
    key_terms: &[String],
    date: NaiveDate,
) -> std::fmt::Result {
    write!(out, "「{query}」に関する検索結果のサマリ：\n\n")?;

    if !key_terms.is_empty() {
        write!(out, "主要キーワード: {}\n\n", key_terms.join("、"))?;
    }

    out.push_str("重要なポイント:\n");
    let points: Vec<String> = sentences
        .iter()
        .take(KEY_POINT_COUNT)
        .enumerate()
        .map(|(i, sentence)| format_point(i + 1, sentence))
        .collect();
    out.push_str(&points.join("\n"));
    out.push_str("\n\n");

    if sentences.len() > KEY_POINT_COUNT {
        let extra: Vec<&str> = sentences
            .iter()
            .skip(KEY_POINT_COUNT)
            .take(EXTRA_SENTENCE_COUNT)
            .map(String::as_str)
            .collect();
        write!(out, "\nその他の関連情報として、{}。", extra.join("。"))?;
    }

    write!(
        out,
        "\n\nこの情報は{}時点での検索結果に基づいています。",
        date.format("%Y/%-m/%-d")
    )
}

fn format_point(number: usize, sentence: &str) -> String {
    let shown = take_chars(sentence, MAX_POINT_CHARS);
    let marker = if shown.len() < sentence.len() { ELLIPSIS } else { "" };
    format!("{number}. {shown}{marker}")
}

/// Cuts text longer than [`MAX_SUMMARY_CHARS`] to exactly that many
/// characters, the last three being [`ELLIPSIS`].
#[must_use]
pub fn cap_length(summary: String) -> String {
    if summary.chars().count() <= MAX_SUMMARY_CHARS {
        return summary;
    }
    let keep = MAX_SUMMARY_CHARS - ELLIPSIS.chars().count();
    format!("{}{ELLIPSIS}", take_chars(&summary, keep))
}
