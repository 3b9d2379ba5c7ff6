//! Reads a `{ "query": ..., "results": [...] }` body on stdin and prints the
//! response envelope. `websearch-summary status` prints the API key status.

use anyhow::Context;
use tokio::io::AsyncReadExt;
use websearch_summary::api::{handle_api_key_status, handle_summarize};
use websearch_summary::core::config::AppConfig;
use websearch_summary::summarize::ExtractiveSummarizer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    websearch_summary::setup_logging();
    let config = AppConfig::from_env().context("failed to load configuration")?;

    let response = if std::env::args().nth(1).as_deref() == Some("status") {
        handle_api_key_status(&config)
    } else {
        let mut body = String::new();
        tokio::io::stdin()
            .read_to_string(&mut body)
            .await
            .context("failed to read request body from stdin")?;
        let summarizer = ExtractiveSummarizer::from_config(&config);
        handle_summarize(&summarizer, &body).await
    };

    println!("{response}");
    Ok(())
}
