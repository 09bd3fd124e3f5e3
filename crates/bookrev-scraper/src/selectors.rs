//! Compiled form of [`bookrev_core::SelectorSet`].

use bookrev_core::SelectorSet;
use scraper::Selector;

use crate::error::ScraperError;

/// Selectors parsed once per run and shared by every review card.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub(crate) title: Selector,
    pub(crate) author: Selector,
    pub(crate) review_list: Selector,
    pub(crate) review_card: Selector,
    pub(crate) profile_info: Selector,
    pub(crate) profile_link: Selector,
    pub(crate) profile_meta: Selector,
    pub(crate) meta_item: Selector,
    pub(crate) shelf_status: Selector,
    pub(crate) rating_stars: Selector,
    pub(crate) rating_label_attr: String,
    pub(crate) content: Selector,
}

impl CompiledSelectors {
    /// Parses every CSS selector in `set`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] naming the first key whose
    /// selector is not valid CSS.
    pub fn compile(set: &SelectorSet) -> Result<Self, ScraperError> {
        let parse = |key: &'static str, selector: &str| -> Result<Selector, ScraperError> {
            Selector::parse(selector).map_err(|e| ScraperError::InvalidSelector {
                key,
                selector: selector.to_owned(),
                reason: e.to_string(),
            })
        };

        Ok(Self {
            title: parse("title", &set.title)?,
            author: parse("author", &set.author)?,
            review_list: parse("review_list", &set.review_list)?,
            review_card: parse("review_card", &set.review_card)?,
            profile_info: parse("profile_info", &set.profile_info)?,
            profile_link: parse("profile_link", &set.profile_link)?,
            profile_meta: parse("profile_meta", &set.profile_meta)?,
            meta_item: parse("meta_item", &set.meta_item)?,
            shelf_status: parse("shelf_status", &set.shelf_status)?,
            rating_stars: parse("rating_stars", &set.rating_stars)?,
            rating_label_attr: set.rating_label_attr.trim().to_owned(),
            content: parse("content", &set.content)?,
        })
    }
}
