use reqwest::Client;

use crate::error::ScraperError;

/// HTTP client that downloads a single book page.
///
/// Sends one `GET` per call with only a `User-Agent` header. Non-2xx
/// responses are returned as [`ScraperError::UnexpectedStatus`]; nothing is
/// retried.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` that identifies itself with `user_agent`.
    ///
    /// Timeouts are left at the `reqwest` defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] — the request could not complete or the body
    ///   could not be read.
    /// - [`ScraperError::UnexpectedStatus`] — the server answered with a
    ///   non-2xx status.
    pub async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "fetching page");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::info!(url, status = status.as_u16(), bytes = body.len(), "page fetched");

        Ok(body)
    }
}
