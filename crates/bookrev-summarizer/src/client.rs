use reqwest::Client;

use crate::error::SummarizerError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, SummarizerConfig};

/// Chat completions client that turns aggregated review text into a summary.
pub struct Summarizer {
    client: Client,
    config: SummarizerConfig,
}

impl Summarizer {
    /// Creates a `Summarizer` with transport-default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizerError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Sends the system prompt and `content` to the model and returns its reply.
    ///
    /// Exactly one system and one user message are sent; the call is made
    /// once and never retried.
    ///
    /// # Errors
    ///
    /// - [`SummarizerError::Http`] — the endpoint is unreachable or the body
    ///   could not be read.
    /// - [`SummarizerError::UnexpectedStatus`] — any non-2xx status.
    /// - [`SummarizerError::Deserialize`] — the body is not a chat completion.
    /// - [`SummarizerError::EmptyResponse`] — no choice carried message content.
    pub async fn summarize(&self, content: &str) -> Result<String, SummarizerError> {
        let url = self.config.completions_url();
        let request = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            stream: false,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content,
                },
            ],
        };

        tracing::info!(
            model = %self.config.model,
            temperature = self.config.temperature,
            chars = content.chars().count(),
            "requesting summary"
        );

        let mut builder = self.client.post(&url).json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SummarizerError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(SummarizerError::Deserialize)?;

        let summary = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(SummarizerError::EmptyResponse)?;

        tracing::debug!(chars = summary.chars().count(), "summary received");

        Ok(summary)
    }
}
