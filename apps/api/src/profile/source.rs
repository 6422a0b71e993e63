//! Upstream profile sources.
//!
//! Two upstreams serve the same data in different shapes: a keyed proxy
//! API and an authenticated member API. The `ProfileSource` trait keeps
//! normalization written once while the concrete source stays swappable,
//! and mockable in tests.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Base URL of the authenticated member API. Credentials are supplied
/// externally; no session negotiation happens here.
const MEMBER_API_BASE: &str = "https://www.linkedin.com/voyager/api";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}")]
    Status { status: u16 },
}

/// Capability contract for upstream profile data.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetches the raw, source-shaped profile payload for a public handle.
    async fn fetch_profile(&self, username: &str) -> Result<Value, SourceError>;

    /// Fetches contact data when the source exposes it. Sources without a
    /// contact capability return `Ok(None)`.
    async fn fetch_contact_info(&self, _username: &str) -> Result<Option<Value>, SourceError> {
        Ok(None)
    }
}

/// Keyed third-party proxy API reachable over HTTPS with header-based auth.
/// Does not expose contact data.
pub struct ProxyApiSource {
    client: Client,
    api_key: String,
    host: String,
}

impl ProxyApiSource {
    pub fn new(api_key: String, host: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            host,
        }
    }
}

#[async_trait]
impl ProfileSource for ProxyApiSource {
    async fn fetch_profile(&self, username: &str) -> Result<Value, SourceError> {
        let response = self
            .client
            .get(format!("https://{}/", self.host))
            .query(&[("username", username)])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Authenticated member API client with a contact-info capability.
pub struct MemberApiSource {
    client: Client,
    username: String,
    password: String,
}

impl MemberApiSource {
    pub fn new(username: String, password: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            username,
            password,
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, SourceError> {
        let response = self
            .client
            .get(format!("{MEMBER_API_BASE}{path}"))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ProfileSource for MemberApiSource {
    async fn fetch_profile(&self, username: &str) -> Result<Value, SourceError> {
        self.get_json(&format!("/identity/profiles/{username}/profileView"))
            .await
    }

    async fn fetch_contact_info(&self, username: &str) -> Result<Option<Value>, SourceError> {
        self.get_json(&format!("/identity/profiles/{username}/profileContactInfo"))
            .await
            .map(Some)
    }
}
