//! Shared types and configuration for the book review pipeline.

pub mod app_config;
pub mod config;
pub mod reviews;
pub mod selectors;

use thiserror::Error;

pub use app_config::{AppConfig, FollowersPolicy};
pub use config::{load_app_config, load_app_config_from_env};
pub use reviews::{
    CleanedReviewRow, ExtractedPage, RawReview, ReviewerProfile, NO_RATING_GIVEN, NOT_FOUND,
};
pub use selectors::{load_selector_set, SelectorSet};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse selector file: {0}")]
    SelectorFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
