mod pipeline;

use std::path::PathBuf;

use bookrev_core::FollowersPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::pipeline::{resolve_prompt, scrape_book, summarize_book, ScrapeOptions};

#[derive(Debug, Parser)]
#[command(name = "bookrev")]
#[command(about = "Scrape a book page's reviews and summarize them with a language model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and normalize the reviews on a book page and print them as JSON
    Extract {
        /// Book page URL
        url: String,

        #[command(flatten)]
        scrape: ScrapeArgs,
    },
    /// Run the full pipeline and print the review summary
    Summarize {
        /// Book page URL
        url: String,

        #[command(flatten)]
        scrape: ScrapeArgs,

        /// Model identifier (overrides BOOKREV_LLM_MODEL)
        #[arg(long)]
        model: Option<String>,

        /// Sampling temperature in 0.0..=2.0 (overrides BOOKREV_LLM_TEMPERATURE)
        #[arg(long, value_parser = bookrev_core::config::parse_temperature)]
        temperature: Option<f32>,

        /// File holding the system prompt (overrides BOOKREV_PROMPT_PATH)
        #[arg(long)]
        prompt_file: Option<PathBuf>,

        /// Print title, author, reviews and summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct ScrapeArgs {
    /// YAML selector file (overrides BOOKREV_SELECTORS_PATH)
    #[arg(long)]
    selectors: Option<PathBuf>,

    /// How unparseable follower counts are handled (overrides BOOKREV_FOLLOWERS_POLICY)
    #[arg(long, value_enum)]
    followers_policy: Option<FollowersPolicyArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FollowersPolicyArg {
    /// Fail the run on a missing or malformed follower count
    Strict,
    /// Map "Not Found" to 0 and other malformed counts to null
    Lenient,
}

impl From<FollowersPolicyArg> for FollowersPolicy {
    fn from(arg: FollowersPolicyArg) -> Self {
        match arg {
            FollowersPolicyArg::Strict => Self::Strict,
            FollowersPolicyArg::Lenient => Self::Lenient,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = bookrev_core::load_app_config_from_env()?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Extract { url, scrape } => {
            let options = ScrapeOptions::resolve(
                &config,
                scrape.selectors.as_deref(),
                scrape.followers_policy.map(FollowersPolicy::from),
            )?;
            let book = scrape_book(&url, &options).await?;
            println!("{}", serde_json::to_string_pretty(&book)?);
        }
        Commands::Summarize {
            url,
            scrape,
            model,
            temperature,
            prompt_file,
            json,
        } => {
            let options = ScrapeOptions::resolve(
                &config,
                scrape.selectors.as_deref(),
                scrape.followers_policy.map(FollowersPolicy::from),
            )?;
            let system_prompt = resolve_prompt(&config, prompt_file.as_deref())?;
            let mut summarizer_config =
                bookrev_summarizer::SummarizerConfig::from_app_config(&config, system_prompt);
            if let Some(model) = model {
                summarizer_config.model = model;
            }
            if let Some(temperature) = temperature {
                summarizer_config.temperature = temperature;
            }

            let report = summarize_book(&url, &options, summarizer_config).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary);
            }
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `BOOKREV_LOG_LEVEL`.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests;
