use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("extraction error: {0}")]
    Extraction(String),

    #[error("invalid CSS selector for {key} (\"{selector}\"): {reason}")]
    InvalidSelector {
        key: &'static str,
        selector: String,
        reason: String,
    },

    #[error("cannot parse {column} value \"{value}\" as an integer")]
    NumericParse { column: &'static str, value: String },
}
