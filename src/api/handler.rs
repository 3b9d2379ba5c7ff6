//! Request handlers for the summarize and API-key-status routes.
//!
//! These are thin: they decode the body, call into [`crate::summarize`] and
//! map the outcome onto a status code.

use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::SummaryRequest;
use crate::errors::SummaryError;
use crate::summarize::{Summarizer, summarize_documents};

pub const MISSING_INPUT_MESSAGE: &str = "クエリと検索結果が必要です";
pub const SUMMARY_FAILURE_MESSAGE: &str = "サマリ生成中にエラーが発生しました";

/// Handles a summarize request body of the form `{ query, results }`.
///
/// Returns 400 when the body is malformed or the query/results are missing,
/// 500 when summarization fails and 200 with the `SummaryResult` otherwise.
#[tracing::instrument(level = "info", skip_all)]
pub async fn handle_summarize(summarizer: &dyn Summarizer, body: &str) -> Value {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "Summarize request received");

    let request: SummaryRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!(%correlation_id, "Rejecting malformed summarize body: {}", e);
            return helpers::err_response(400, MISSING_INPUT_MESSAGE);
        }
    };

    match summarize_documents(summarizer, &request).await {
        Ok(result) => helpers::ok_json(&result),
        Err(SummaryError::InvalidInput(reason)) => {
            warn!(%correlation_id, "Rejecting summarize request: {}", reason);
            helpers::err_response(400, MISSING_INPUT_MESSAGE)
        }
        Err(e) => {
            error!(%correlation_id, "Summary generation error: {}", e);
            helpers::err_response(500, SUMMARY_FAILURE_MESSAGE)
        }
    }
}

/// Reports whether the search provider key is configured.
#[must_use]
pub fn handle_api_key_status(config: &AppConfig) -> Value {
    helpers::ok_json(&config.api_key_status())
}
