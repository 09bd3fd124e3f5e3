//! String cleanup for the raw count and rating texts shown on review cards.
//!
//! See [`crate::normalize`] for how these compose into a cleaned row.

use std::sync::LazyLock;

use bookrev_core::NOT_FOUND;
use regex::Regex;

use crate::error::ScraperError;

/// `"Rating 4 out of 5"` → captures `4`.
static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Rating (\d+) out of").expect("valid rating regex"));

/// `"1.2k followers"` / `"3K followers"` → captures the number before the suffix.
static THOUSANDS_FOLLOWERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)[kK] followers").expect("valid followers regex")
});

/// Highest star rating a review card can show.
const MAX_RATING: u8 = 5;

/// Parses a reviews count such as `"12 reviews"`, `"1 review"` or `"1,024 reviews"`.
///
/// The [`NOT_FOUND`] sentinel counts as `0`.
///
/// # Errors
///
/// Returns [`ScraperError::NumericParse`] if the remainder after stripping
/// the label, whitespace and thousands separators is not an integer.
pub(crate) fn parse_reviews_count(raw: &str) -> Result<u64, ScraperError> {
    if raw == NOT_FOUND {
        return Ok(0);
    }

    strip_count_label(raw, &["reviews", "review"])
        .parse::<u64>()
        .map_err(|_| ScraperError::NumericParse {
            column: "reviewsCount",
            value: raw.to_owned(),
        })
}

/// Parses a followers count such as `"250 followers"`, `"1 follower"` or
/// `"1.5k followers"` (→ 1500).
///
/// The [`NOT_FOUND`] sentinel is not special-cased here; it fails like any
/// other non-numeric text and the caller decides what that means.
///
/// # Errors
///
/// Returns [`ScraperError::NumericParse`] if the text is not a count.
pub(crate) fn parse_followers_count(raw: &str) -> Result<u64, ScraperError> {
    let numeric_error = || ScraperError::NumericParse {
        column: "followersCount",
        value: raw.to_owned(),
    };

    if let Some(caps) = THOUSANDS_FOLLOWERS_RE.captures(raw) {
        let thousands = caps[1].parse::<f64>().map_err(|_| numeric_error())?;
        // Values are small, non-negative and rounded, so the cast is exact.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = (thousands * 1000.0).round() as u64;
        return Ok(count);
    }

    strip_count_label(raw, &["followers", "follower"])
        .parse::<u64>()
        .map_err(|_| numeric_error())
}

/// Parses a star rating from an accessibility label like `"Rating 4 out of 5"`.
///
/// Returns `None` for the "No Rating Given" sentinel, any label that does not
/// match, and ratings above five.
#[must_use]
pub(crate) fn parse_rating(raw: &str) -> Option<u8> {
    let caps = RATING_RE.captures(raw)?;
    caps[1]
        .parse::<u8>()
        .ok()
        .filter(|rating| *rating <= MAX_RATING)
}

/// Removes each label word (in order), then all whitespace and commas.
fn strip_count_label(raw: &str, labels: &[&str]) -> String {
    let mut text = raw.to_owned();
    for label in labels {
        text = text.replace(label, "");
    }
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
