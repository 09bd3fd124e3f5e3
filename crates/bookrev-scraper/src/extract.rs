//! Review extraction from a book page's HTML.
//!
//! Reads the title, the primary author and every review card of the second
//! review list. Structural gaps in the page (title, author, the review list,
//! a reviewer anchor, a review body) fail the extraction; gaps in optional
//! card details fall back to the sentinels in [`bookrev_core::reviews`].

use bookrev_core::{ExtractedPage, RawReview, ReviewerProfile, NO_RATING_GIVEN};
use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::selectors::CompiledSelectors;

/// The page renders a featured list before the community reviews; reviews
/// are read from this (zero-based) container.
const REVIEW_LIST_POSITION: usize = 1;

/// Profile fields filled from the profile-meta spans.
#[derive(Debug, Clone, Copy)]
enum MetaField {
    Books,
    Reviews,
    Followers,
    Author,
}

/// Substring rules applied to every meta span, top to bottom. Each matching
/// rule assigns its field, so a later span overwrites an earlier one.
const META_RULES: [(&str, MetaField); 4] = [
    ("books", MetaField::Books),
    ("reviews", MetaField::Reviews),
    ("followers", MetaField::Followers),
    ("Author", MetaField::Author),
];

impl MetaField {
    fn assign(self, profile: &mut ReviewerProfile, text: &str) {
        match self {
            MetaField::Books => profile.books_count = Some(text.to_owned()),
            MetaField::Reviews => text.clone_into(&mut profile.reviews_count_raw),
            MetaField::Followers => text.clone_into(&mut profile.followers_count_raw),
            MetaField::Author => profile.is_author = true,
        }
    }
}

/// Why a card's rating could not be read. Every variant ends up as
/// [`NO_RATING_GIVEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RatingLookupFailure {
    ShelfStatusMissing,
    StarsMissing,
    LabelMissing,
}

impl std::fmt::Display for RatingLookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingLookupFailure::ShelfStatusMissing => write!(f, "shelf status element missing"),
            RatingLookupFailure::StarsMissing => write!(f, "rating stars element missing"),
            RatingLookupFailure::LabelMissing => write!(f, "rating label missing"),
        }
    }
}

/// Parses `html` and extracts the book title, author and review cards.
///
/// # Errors
///
/// Returns [`ScraperError::Extraction`] when the title, the author, the
/// second review list, a reviewer anchor or a review body is missing.
pub fn extract_reviews(
    html: &str,
    selectors: &CompiledSelectors,
) -> Result<ExtractedPage, ScraperError> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let title = first_text(root, &selectors.title)
        .ok_or_else(|| ScraperError::Extraction("title not found".into()))?;
    let author = first_text(root, &selectors.author)
        .ok_or_else(|| ScraperError::Extraction("author not found".into()))?;

    let review_list = document
        .select(&selectors.review_list)
        .nth(REVIEW_LIST_POSITION)
        .ok_or_else(|| ScraperError::Extraction("review list not found".into()))?;

    let reviews = review_list
        .select(&selectors.review_card)
        .enumerate()
        .map(|(position, card)| extract_review(card, position + 1, selectors))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(%title, %author, reviews = reviews.len(), "extracted reviews");

    Ok(ExtractedPage {
        title,
        author,
        reviews,
    })
}

fn extract_review(
    card: ElementRef<'_>,
    index: usize,
    selectors: &CompiledSelectors,
) -> Result<RawReview, ScraperError> {
    let anchor = card
        .select(&selectors.profile_info)
        .next()
        .and_then(|info| info.select(&selectors.profile_link).next())
        .ok_or_else(|| {
            ScraperError::Extraction(format!("reviewer profile not found for review {index}"))
        })?;

    let mut profile = ReviewerProfile::new(
        element_text(anchor),
        anchor.value().attr("href").unwrap_or_default(),
    );

    // A card without a meta block keeps every default.
    if let Some(meta) = card.select(&selectors.profile_meta).next() {
        for item in meta.select(&selectors.meta_item) {
            classify_meta_item(&element_text(item), &mut profile);
        }
    }

    let rating_raw = read_rating(card, selectors).unwrap_or_else(|reason| {
        tracing::debug!(index, %reason, "no rating for review");
        NO_RATING_GIVEN.to_owned()
    });

    let content = card
        .select(&selectors.content)
        .next()
        .map(element_text)
        .ok_or_else(|| {
            ScraperError::Extraction(format!("review content not found for review {index}"))
        })?;

    Ok(RawReview {
        index,
        profile,
        rating_raw,
        content,
    })
}

fn classify_meta_item(text: &str, profile: &mut ReviewerProfile) {
    for (needle, field) in META_RULES {
        if text.contains(needle) {
            field.assign(profile, text);
        }
    }
}

fn read_rating(
    card: ElementRef<'_>,
    selectors: &CompiledSelectors,
) -> Result<String, RatingLookupFailure> {
    let shelf = card
        .select(&selectors.shelf_status)
        .next()
        .ok_or(RatingLookupFailure::ShelfStatusMissing)?;
    let stars = shelf
        .select(&selectors.rating_stars)
        .next()
        .ok_or(RatingLookupFailure::StarsMissing)?;
    let label = stars
        .value()
        .attr(&selectors.rating_label_attr)
        .ok_or(RatingLookupFailure::LabelMissing)?;

    Ok(label.to_owned())
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

/// All descendant text of `element`, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
