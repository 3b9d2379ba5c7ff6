//! JSON request handling in front of the summarizer

pub mod handler;
pub mod helpers;

// Re-export the handlers for convenience
pub use handler::{handle_api_key_status, handle_summarize};
