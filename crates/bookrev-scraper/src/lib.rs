//! Book page scraping: fetch, extract, normalize and aggregate reviews.

pub mod aggregate;
pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod selectors;

mod parse;

pub use aggregate::aggregate_content;
pub use client::PageFetcher;
pub use error::ScraperError;
pub use extract::extract_reviews;
pub use normalize::normalize_reviews;
pub use selectors::CompiledSelectors;
