use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Invalid summarization input: {0}")]
    InvalidInput(String),

    #[error("Summary generation failed: {0}")]
    InternalFailure(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<regex::Error> for SummaryError {
    fn from(error: regex::Error) -> Self {
        SummaryError::InternalFailure(format!("pattern error: {error}"))
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::InvalidInput(error.to_string())
    }
}

impl From<anyhow::Error> for SummaryError {
    fn from(error: anyhow::Error) -> Self {
        SummaryError::InternalFailure(error.to_string())
    }
}
