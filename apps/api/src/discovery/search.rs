//! Search-engine results fetch.
//!
//! The SERP is an unofficial upstream; this client only fetches the page
//! body. Parsing lives in `parser` so the brittle extraction can be tested
//! against fixtures without any network.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

const SEARCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Sent on every search request; the results page serves a reduced layout
/// to clients without a browser-like user agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search request failed with status {status}")]
    Status { status: u16 },
}

/// Capability contract for fetching one page of search results.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn fetch_results(&self, query: &str) -> Result<String, SearchError>;
}

pub struct GoogleSearchClient {
    client: Client,
}

impl GoogleSearchClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(SEARCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl SearchClient for GoogleSearchClient {
    async fn fetch_results(&self, query: &str) -> Result<String, SearchError> {
        let url = format!("https://www.google.com/search?q={}", query.replace(' ', "+"));

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
