//! websearch-summary - extractive summaries of web search results.
//!
//! A search front-end retrieves documents from an external provider and asks
//! this crate for a short report: the most frequent keywords, the leading
//! sentences as numbered key points, and a dated footer, bounded to 500
//! characters.
//!
//! # Architecture
//!
//! - `summarize` holds the keyword extractor and the summary composer behind
//!   the [`summarize::Summarizer`] trait, so another backend can replace the
//!   extractive one without touching callers
//! - `api` wraps the summarizer in JSON request handlers with status codes
//! - `core` carries configuration and the request/response models
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use websearch_summary::core::models::{Document, SummaryRequest};
//! use websearch_summary::summarize::{ExtractiveSummarizer, FixedClock, summarize_documents};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap());
//!     let summarizer = ExtractiveSummarizer::new(Arc::new(clock), chrono_tz::Asia::Tokyo);
//!
//!     let request = SummaryRequest {
//!         query: "東京 天気".to_string(),
//!         results: vec![Document::new(
//!             "東京の天気",
//!             "https://weather.example/tokyo",
//!             "今日は一日中晴れて暖かい陽気です。",
//!         )],
//!     };
//!
//!     let result = summarize_documents(&summarizer, &request).await?;
//!     assert!(result.summary.starts_with("「東京 天気」に関する検索結果のサマリ："));
//!     assert_eq!(result.source_count, 1);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod summarize;

/// Configure structured logging with JSON output.
///
/// Installs a tracing-subscriber registry with a JSON formatter. Call it once
/// at process start.
///
/// # Example
///
/// ```
/// websearch_summary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
