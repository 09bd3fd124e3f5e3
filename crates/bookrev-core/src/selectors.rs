//! CSS selector set describing the book page markup.
//!
//! The defaults target the current Goodreads book page. A YAML file can
//! override any subset of keys, e.g.:
//!
//! ```yaml
//! review_card: "article.ReviewCard"
//! content: "section.ReviewText__content span.Formatted"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorSet {
    pub title: String,
    pub author: String,
    /// Review-list containers. Reviews are read from the second match.
    pub review_list: String,
    pub review_card: String,
    pub profile_info: String,
    /// Anchor inside `profile_info` carrying the reviewer name and link.
    pub profile_link: String,
    pub profile_meta: String,
    /// Elements inside `profile_meta` classified as books/reviews/followers/author.
    pub meta_item: String,
    pub shelf_status: String,
    pub rating_stars: String,
    /// Attribute on `rating_stars` holding `"Rating N out of 5"`.
    pub rating_label_attr: String,
    pub content: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            title: r#"h1[data-testid="bookTitle"]"#.to_string(),
            author: "span.ContributorLink__name".to_string(),
            review_list: "div.ReviewsList".to_string(),
            review_card: "article.ReviewCard".to_string(),
            profile_info: "div.ReviewerProfile__info".to_string(),
            profile_link: "div.ReviewerProfile__name a".to_string(),
            profile_meta: "div.ReviewerProfile__meta".to_string(),
            meta_item: "span".to_string(),
            shelf_status: "div.ShelfStatus".to_string(),
            rating_stars: "span.RatingStars__small".to_string(),
            rating_label_attr: "aria-label".to_string(),
            content: "section.ReviewText__content span.Formatted".to_string(),
        }
    }
}

impl SelectorSet {
    /// `(key, selector)` pairs in declaration order, for validation and
    /// error reporting.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("title", self.title.as_str()),
            ("author", self.author.as_str()),
            ("review_list", self.review_list.as_str()),
            ("review_card", self.review_card.as_str()),
            ("profile_info", self.profile_info.as_str()),
            ("profile_link", self.profile_link.as_str()),
            ("profile_meta", self.profile_meta.as_str()),
            ("meta_item", self.meta_item.as_str()),
            ("shelf_status", self.shelf_status.as_str()),
            ("rating_stars", self.rating_stars.as_str()),
            ("rating_label_attr", self.rating_label_attr.as_str()),
            ("content", self.content.as_str()),
        ]
    }
}

/// Load a selector set from a YAML file, filling absent keys with defaults.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_selector_set(path: &Path) -> Result<SelectorSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_selector_set(&content)
}

/// Parse a selector set from YAML text.
///
/// An empty document yields the defaults.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed, has unknown keys, or
/// leaves a selector empty.
pub fn parse_selector_set(yaml: &str) -> Result<SelectorSet, ConfigError> {
    let set: SelectorSet = if yaml.trim().is_empty() {
        SelectorSet::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    validate_selector_set(&set)?;

    Ok(set)
}

fn validate_selector_set(set: &SelectorSet) -> Result<(), ConfigError> {
    for (key, value) in set.entries() {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "selector '{key}' must be non-empty"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "selectors_test.rs"]
mod tests;
