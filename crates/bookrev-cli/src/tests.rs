use std::io::Write;

use bookrev_core::{AppConfig, FollowersPolicy, SelectorSet};
use bookrev_summarizer::{SummarizerConfig, DEFAULT_SYSTEM_PROMPT};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn test_app_config() -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        user_agent: "Mozilla/5.0 (bookrev-test)".to_string(),
        llm_base_url: "http://127.0.0.1:9/v1".to_string(),
        llm_api_key: None,
        llm_model: "llama3.2:3b".to_string(),
        llm_temperature: 0.0,
        selectors_path: None,
        prompt_path: None,
        followers_policy: FollowersPolicy::Strict,
    }
}

const TWO_REVIEW_PAGE: &str = r#"<html><body>
<h1 data-testid="bookTitle">The Long Way Home</h1>
<span class="ContributorLink__name">Jane Doe</span>
<div class="ReviewsList"></div>
<div class="ReviewsList">
  <article class="ReviewCard">
    <div class="ReviewerProfile__info">
      <div class="ReviewerProfile__name"><a href="/user/show/1-alice">Alice</a></div>
      <div class="ReviewerProfile__meta"><span>102 books</span><span>5 reviews</span><span>1.2k followers</span></div>
    </div>
    <div class="ShelfStatus"><span class="RatingStars__small" aria-label="Rating 5 out of 5"></span></div>
    <section class="ReviewText__content"><span class="Formatted">Loved the pacing.</span></section>
  </article>
  <article class="ReviewCard">
    <div class="ReviewerProfile__info">
      <div class="ReviewerProfile__name"><a href="/user/show/2-bob">Bob</a></div>
      <div class="ReviewerProfile__meta"><span>3 followers</span></div>
    </div>
    <section class="ReviewText__content"><span class="Formatted">Characters felt flat.</span></section>
  </article>
</div>
</body></html>"#;

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_extract_command() {
    let cli = Cli::try_parse_from(["bookrev", "extract", "https://example.com/book/1"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Extract { url, scrape } => {
            assert_eq!(url, "https://example.com/book/1");
            assert!(scrape.selectors.is_none());
            assert!(scrape.followers_policy.is_none());
        }
        other @ Commands::Summarize { .. } => panic!("expected Extract, got: {other:?}"),
    }
}

#[test]
fn parses_summarize_command_with_overrides() {
    let cli = Cli::try_parse_from([
        "bookrev",
        "summarize",
        "https://example.com/book/1",
        "--model",
        "qwen2.5:3b",
        "--temperature",
        "0.4",
        "--prompt-file",
        "prompt.txt",
        "--selectors",
        "selectors.yaml",
        "--followers-policy",
        "lenient",
        "--json",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Summarize {
            url,
            scrape,
            model,
            temperature,
            prompt_file,
            json,
        } => {
            assert_eq!(url, "https://example.com/book/1");
            assert_eq!(model.as_deref(), Some("qwen2.5:3b"));
            assert!(temperature.is_some_and(|t| (t - 0.4).abs() < f32::EPSILON));
            assert_eq!(prompt_file, Some(PathBuf::from("prompt.txt")));
            assert_eq!(scrape.selectors, Some(PathBuf::from("selectors.yaml")));
            assert_eq!(scrape.followers_policy, Some(FollowersPolicyArg::Lenient));
            assert!(json);
        }
        other @ Commands::Extract { .. } => panic!("expected Summarize, got: {other:?}"),
    }
}

#[test]
fn summarize_rejects_out_of_range_temperature() {
    let result = Cli::try_parse_from([
        "bookrev",
        "summarize",
        "https://example.com/book/1",
        "--temperature",
        "5",
    ]);
    assert!(result.is_err());
}

#[test]
fn url_is_required() {
    assert!(Cli::try_parse_from(["bookrev", "summarize"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["bookrev"]).is_err());
}

// ---------------------------------------------------------------------------
// Option resolution
// ---------------------------------------------------------------------------

#[test]
fn scrape_options_default_to_config() {
    let options = ScrapeOptions::resolve(&test_app_config(), None, None).unwrap();
    assert_eq!(options.selectors, SelectorSet::default());
    assert_eq!(options.followers_policy, FollowersPolicy::Strict);
    assert_eq!(options.user_agent, "Mozilla/5.0 (bookrev-test)");
}

#[test]
fn lenient_flag_overrides_config_policy() {
    let options =
        ScrapeOptions::resolve(&test_app_config(), None, Some(FollowersPolicy::Lenient)).unwrap();
    assert_eq!(options.followers_policy, FollowersPolicy::Lenient);
}

#[test]
fn strict_flag_overrides_lenient_config_policy() {
    let mut config = test_app_config();
    config.followers_policy = FollowersPolicy::Lenient;

    let options = ScrapeOptions::resolve(&config, None, Some(FollowersPolicy::Strict)).unwrap();
    assert_eq!(options.followers_policy, FollowersPolicy::Strict);
}

#[test]
fn parses_strict_followers_policy_flag() {
    let cli = Cli::try_parse_from([
        "bookrev",
        "extract",
        "https://example.com/book/1",
        "--followers-policy",
        "strict",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Extract { scrape, .. } => {
            assert_eq!(scrape.followers_policy, Some(FollowersPolicyArg::Strict));
            assert_eq!(
                FollowersPolicy::from(FollowersPolicyArg::Strict),
                FollowersPolicy::Strict
            );
        }
        other @ Commands::Summarize { .. } => panic!("expected Extract, got: {other:?}"),
    }
}

#[test]
fn rejects_unknown_followers_policy() {
    let result = Cli::try_parse_from([
        "bookrev",
        "extract",
        "https://example.com/book/1",
        "--followers-policy",
        "loose",
    ]);
    assert!(result.is_err());
}

#[test]
fn selector_flag_overrides_config_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "review_card: \"li.review\"").unwrap();

    let mut config = test_app_config();
    config.selectors_path = Some(PathBuf::from("/nonexistent/selectors.yaml"));

    let options = ScrapeOptions::resolve(&config, Some(file.path()), None).unwrap();
    assert_eq!(options.selectors.review_card, "li.review");
}

#[test]
fn missing_selector_file_is_an_error() {
    let mut config = test_app_config();
    config.selectors_path = Some(PathBuf::from("/nonexistent/selectors.yaml"));
    assert!(ScrapeOptions::resolve(&config, None, None).is_err());
}

#[test]
fn prompt_defaults_to_builtin() {
    let prompt = resolve_prompt(&test_app_config(), None).unwrap();
    assert_eq!(prompt, DEFAULT_SYSTEM_PROMPT);
}

#[test]
fn prompt_file_is_read_and_trimmed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "  Summarize briefly.  ").unwrap();

    let prompt = resolve_prompt(&test_app_config(), Some(file.path())).unwrap();
    assert_eq!(prompt, "Summarize briefly.");
}

#[test]
fn blank_prompt_file_is_an_error() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(resolve_prompt(&test_app_config(), Some(file.path())).is_err());
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

fn summarizer_config(server: &MockServer) -> SummarizerConfig {
    SummarizerConfig {
        base_url: format!("{}/v1", server.uri()),
        ..SummarizerConfig::default()
    }
}

#[tokio::test]
async fn summarize_book_runs_every_stage() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/book/show/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_REVIEW_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                { "role": "system" },
                { "role": "user", "content": "Loved the pacing.\nCharacters felt flat." }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Mixed reception." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ScrapeOptions::resolve(&test_app_config(), None, None).unwrap();
    let report = summarize_book(
        &format!("{}/book/show/42", server.uri()),
        &options,
        summarizer_config(&server),
    )
    .await
    .unwrap();

    assert_eq!(report.title, "The Long Way Home");
    assert_eq!(report.author, "Jane Doe");
    assert_eq!(report.summary, "Mixed reception.");
    assert_eq!(report.reviews.len(), 2);
    assert_eq!(report.reviews[0].followers_count, Some(1200));
    assert_eq!(report.reviews[1].reviews_count, 0);
    assert_eq!(report.reviews[1].rating, None);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["reviews"][0]["reviewsCount"], 5);
    assert_eq!(value["summary"], "Mixed reception.");
}

#[tokio::test]
async fn extraction_failure_skips_summarization() {
    let server = MockServer::start().await;

    let one_list_page = TWO_REVIEW_PAGE.replacen(r#"<div class="ReviewsList"></div>"#, "", 1);
    Mock::given(method("GET"))
        .and(path("/book/show/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(one_list_page))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let options = ScrapeOptions::resolve(&test_app_config(), None, None).unwrap();
    let err = summarize_book(
        &format!("{}/book/show/7", server.uri()),
        &options,
        summarizer_config(&server),
    )
    .await
    .unwrap_err();

    let scraper_err = err
        .downcast_ref::<bookrev_scraper::ScraperError>()
        .expect("expected a ScraperError");
    assert!(
        matches!(scraper_err, bookrev_scraper::ScraperError::Extraction(msg) if msg == "review list not found"),
        "expected review list extraction error, got: {scraper_err:?}"
    );
}

#[tokio::test]
async fn strict_followers_policy_aborts_before_summarization() {
    let server = MockServer::start().await;

    let page = TWO_REVIEW_PAGE.replace("<span>3 followers</span>", "");
    Mock::given(method("GET"))
        .and(path("/book/show/8"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let options = ScrapeOptions::resolve(&test_app_config(), None, None).unwrap();
    let result = summarize_book(
        &format!("{}/book/show/8", server.uri()),
        &options,
        summarizer_config(&server),
    )
    .await;

    assert!(result.is_err(), "expected NumericParse failure, got: {result:?}");
}

#[tokio::test]
async fn scrape_book_with_lenient_policy_fills_missing_followers() {
    let server = MockServer::start().await;

    let page = TWO_REVIEW_PAGE.replace("<span>3 followers</span>", "");
    Mock::given(method("GET"))
        .and(path("/book/show/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let options =
        ScrapeOptions::resolve(&test_app_config(), None, Some(FollowersPolicy::Lenient)).unwrap();
    let book = scrape_book(&format!("{}/book/show/9", server.uri()), &options)
        .await
        .unwrap();

    assert_eq!(book.reviews[1].followers_count, Some(0));
}
