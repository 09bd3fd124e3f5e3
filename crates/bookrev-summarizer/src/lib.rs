//! Review summarization through an OpenAI-compatible chat completions API.
//!
//! Sends one system instruction and one user message (the aggregated review
//! text) per call and returns the model's reply. No history, streaming or
//! retries.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::Summarizer;
pub use error::SummarizerError;
pub use prompt::DEFAULT_SYSTEM_PROMPT;
pub use types::SummarizerConfig;
