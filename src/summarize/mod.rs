//! Summarization of search results.
//!
//! [`summarize_documents`] is the single entry point used by callers: it
//! builds the combined text from the retrieved documents and hands it to a
//! [`Summarizer`] backend.

pub mod clock;
pub mod composer;
pub mod terms;
pub mod text;

pub use clock::{Clock, FixedClock, SystemClock};
pub use composer::{ExtractiveSummarizer, Summarizer, compose_summary};
pub use terms::extract_key_terms;

use tracing::info;

use crate::core::models::SummaryRequest;
use crate::core::models::SummaryResult;
use crate::errors::SummaryError;

/// Summarizes the request's documents for its query.
///
/// # Errors
///
/// Returns [`SummaryError::InvalidInput`] when the query is empty or there
/// are no documents, and propagates any backend failure unchanged.
#[tracing::instrument(level = "info", skip_all, fields(documents = request.results.len()))]
pub async fn summarize_documents(
    summarizer: &dyn Summarizer,
    request: &SummaryRequest,
) -> Result<SummaryResult, SummaryError> {
    if request.query.is_empty() {
        return Err(SummaryError::InvalidInput("query is empty".to_string()));
    }
    if request.results.is_empty() {
        return Err(SummaryError::InvalidInput("no documents".to_string()));
    }

    let combined = text::combine_documents(&request.results);
    let summary = summarizer.summarize(&request.query, &combined).await?;
    info!(chars = summary.chars().count(), "Summary generated");

    Ok(SummaryResult {
        summary,
        query: request.query.clone(),
        source_count: request.results.len(),
    })
}
