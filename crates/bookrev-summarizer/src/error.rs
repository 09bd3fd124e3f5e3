use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model endpoint returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("chat completion response parse error: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("chat completion response contained no message")]
    EmptyResponse,
}
