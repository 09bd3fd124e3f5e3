//! The scrape → normalize → aggregate → summarize run behind each command.
//!
//! Stages run strictly in sequence and the first error aborts the run.

use std::path::Path;

use anyhow::Context;
use bookrev_core::{load_selector_set, AppConfig, CleanedReviewRow, FollowersPolicy, SelectorSet};
use bookrev_scraper::{
    aggregate_content, extract_reviews, normalize_reviews, CompiledSelectors, PageFetcher,
};
use bookrev_summarizer::{Summarizer, SummarizerConfig, DEFAULT_SYSTEM_PROMPT};
use serde::Serialize;

/// Scraper settings after merging CLI flags over the environment config.
#[derive(Debug, Clone)]
pub(crate) struct ScrapeOptions {
    pub user_agent: String,
    pub selectors: SelectorSet,
    pub followers_policy: FollowersPolicy,
}

impl ScrapeOptions {
    /// A selector file given on the command line wins over
    /// `BOOKREV_SELECTORS_PATH`; `--followers-policy` wins over
    /// `BOOKREV_FOLLOWERS_POLICY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector file cannot be loaded.
    pub(crate) fn resolve(
        config: &AppConfig,
        selectors_path: Option<&Path>,
        followers_policy: Option<FollowersPolicy>,
    ) -> anyhow::Result<Self> {
        let selectors = match selectors_path.or(config.selectors_path.as_deref()) {
            Some(path) => load_selector_set(path)
                .with_context(|| format!("failed to load selectors from {}", path.display()))?,
            None => SelectorSet::default(),
        };

        let followers_policy = followers_policy.unwrap_or(config.followers_policy);

        Ok(Self {
            user_agent: config.user_agent.clone(),
            selectors,
            followers_policy,
        })
    }
}

/// Output of the `extract` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookReviews {
    pub title: String,
    pub author: String,
    pub reviews: Vec<CleanedReviewRow>,
}

/// Output of the `summarize` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryReport {
    pub title: String,
    pub author: String,
    pub reviews: Vec<CleanedReviewRow>,
    pub summary: String,
}

/// Reads the system prompt from a file (CLI flag first, then
/// `BOOKREV_PROMPT_PATH`), or falls back to [`DEFAULT_SYSTEM_PROMPT`].
///
/// # Errors
///
/// Returns an error if the prompt file cannot be read or is blank.
pub(crate) fn resolve_prompt(
    config: &AppConfig,
    prompt_path: Option<&Path>,
) -> anyhow::Result<String> {
    let Some(path) = prompt_path.or(config.prompt_path.as_deref()) else {
        return Ok(DEFAULT_SYSTEM_PROMPT.to_string());
    };

    let prompt = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read prompt from {}", path.display()))?;
    let prompt = prompt.trim();
    if prompt.is_empty() {
        anyhow::bail!("prompt file {} is empty", path.display());
    }

    Ok(prompt.to_string())
}

/// Fetches `url`, extracts its reviews and normalizes them.
///
/// # Errors
///
/// Returns an error if the selectors are invalid, the fetch fails, a
/// required page element is missing, or a count cannot be parsed.
pub(crate) async fn scrape_book(url: &str, options: &ScrapeOptions) -> anyhow::Result<BookReviews> {
    let selectors = CompiledSelectors::compile(&options.selectors)?;
    let fetcher = PageFetcher::new(&options.user_agent)?;

    let html = fetcher.fetch(url).await?;
    let page = extract_reviews(&html, &selectors)?;
    let reviews = normalize_reviews(page.reviews, options.followers_policy)?;

    if reviews.is_empty() {
        tracing::warn!(url, "page has no reviews");
    }

    Ok(BookReviews {
        title: page.title,
        author: page.author,
        reviews,
    })
}

/// Runs the full pipeline for `url` and returns the summary with the rows it
/// was built from.
///
/// # Errors
///
/// Returns an error from any stage; nothing downstream of a failed stage runs.
pub(crate) async fn summarize_book(
    url: &str,
    options: &ScrapeOptions,
    summarizer_config: SummarizerConfig,
) -> anyhow::Result<SummaryReport> {
    let summarizer = Summarizer::new(summarizer_config)?;
    let book = scrape_book(url, options).await?;

    let content = aggregate_content(&book.reviews);
    let summary = summarizer.summarize(&content).await?;

    tracing::info!(
        title = %book.title,
        reviews = book.reviews.len(),
        model = %summarizer.config().model,
        "summary complete"
    );

    Ok(SummaryReport {
        title: book.title,
        author: book.author,
        reviews: book.reviews,
        summary,
    })
}
