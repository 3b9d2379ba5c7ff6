//! Configuration and request/response models shared by the summarizer and
//! the API glue.

pub mod config;
pub mod models;
