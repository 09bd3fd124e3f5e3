//! Normalization from [`RawReview`] to [`CleanedReviewRow`].
//!
//! Count and rating parsing is delegated to [`crate::parse`]; this module
//! decides which failures are fatal and which columns survive.

use bookrev_core::{CleanedReviewRow, FollowersPolicy, RawReview, NOT_FOUND};

use crate::error::ScraperError;
use crate::parse::{parse_followers_count, parse_rating, parse_reviews_count};

/// Normalizes every raw review, preserving order.
///
/// Profile link, index, books count and author marker are dropped.
///
/// # Errors
///
/// Returns [`ScraperError::NumericParse`] for the first review whose reviews
/// count cannot be parsed, or whose followers count cannot be parsed under
/// [`FollowersPolicy::Strict`]. Unparseable ratings are never an error.
pub fn normalize_reviews(
    reviews: Vec<RawReview>,
    policy: FollowersPolicy,
) -> Result<Vec<CleanedReviewRow>, ScraperError> {
    let rows = reviews
        .into_iter()
        .map(|review| normalize_review(review, policy))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = rows.len(), %policy, "normalized reviews");

    Ok(rows)
}

fn normalize_review(
    review: RawReview,
    policy: FollowersPolicy,
) -> Result<CleanedReviewRow, ScraperError> {
    let RawReview {
        index,
        profile,
        rating_raw,
        content,
    } = review;

    let reviews_count = parse_reviews_count(&profile.reviews_count_raw)?;
    let followers_count = followers_count(&profile.followers_count_raw, policy, index)?;

    Ok(CleanedReviewRow {
        name: profile.name,
        reviews_count,
        followers_count,
        rating: parse_rating(&rating_raw),
        content,
    })
}

fn followers_count(
    raw: &str,
    policy: FollowersPolicy,
    index: usize,
) -> Result<Option<u64>, ScraperError> {
    match parse_followers_count(raw) {
        Ok(count) => Ok(Some(count)),
        Err(err) => match policy {
            FollowersPolicy::Strict => Err(err),
            FollowersPolicy::Lenient if raw == NOT_FOUND => Ok(Some(0)),
            FollowersPolicy::Lenient => {
                tracing::warn!(index, raw, "unparseable followers count; leaving empty");
                Ok(None)
            }
        },
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
