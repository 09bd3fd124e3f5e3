//! Review records as they move through the pipeline.
//!
//! [`RawReview`] mirrors what the page shows, with textual sentinels standing
//! in for missing fields. [`CleanedReviewRow`] is the typed, trimmed-down row
//! the summarizer consumes.

use serde::{Deserialize, Serialize};

/// Sentinel for a reviews/followers count the page does not show.
pub const NOT_FOUND: &str = "Not Found";

/// Sentinel for a review without a rating control.
pub const NO_RATING_GIVEN: &str = "No Rating Given";

/// Reviewer details scraped from the profile block of a review card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerProfile {
    pub name: String,
    pub profile_link: String,
    /// `true` when the profile meta carries an "Author" marker.
    pub is_author: bool,
    /// Raw `"<n> books"` text, when shown.
    pub books_count: Option<String>,
    /// Raw `"<n> reviews"` text, or [`NOT_FOUND`].
    pub reviews_count_raw: String,
    /// Raw `"<n> followers"` text (may carry a `k` suffix), or [`NOT_FOUND`].
    pub followers_count_raw: String,
}

impl ReviewerProfile {
    /// A profile with every optional field at its default.
    #[must_use]
    pub fn new(name: impl Into<String>, profile_link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_link: profile_link.into(),
            is_author: false,
            books_count: None,
            reviews_count_raw: NOT_FOUND.to_string(),
            followers_count_raw: NOT_FOUND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    /// 1-based position in page order.
    pub index: usize,
    pub profile: ReviewerProfile,
    /// `"Rating <N> out of 5"`, or [`NO_RATING_GIVEN`].
    pub rating_raw: String,
    pub content: String,
}

/// One normalized review. Only the columns the summary stage needs survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedReviewRow {
    pub name: String,
    pub reviews_count: u64,
    pub followers_count: Option<u64>,
    /// Star rating in `0..=5`; `None` when the reviewer gave none.
    pub rating: Option<u8>,
    pub content: String,
}

/// Everything the extractor pulls from one book page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPage {
    pub title: String,
    pub author: String,
    pub reviews: Vec<RawReview>,
}
