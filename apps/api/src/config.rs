use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup aborts if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub rapidapi_key: String,
    pub rapidapi_host: String,
    pub linkedin_api_username: String,
    pub linkedin_api_password: String,
    pub openai_api_key: String,
    pub profile_source: ProfileSourceKind,
    pub port: u16,
    pub rust_log: String,
}

/// Which upstream serves profile fetches for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSourceKind {
    /// Keyed third-party proxy API (no contact data).
    Proxy,
    /// Authenticated member API (contact data capable).
    Member,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let profile_source = match std::env::var("PROFILE_SOURCE").as_deref() {
            Ok("member") => ProfileSourceKind::Member,
            Ok("proxy") | Err(_) => ProfileSourceKind::Proxy,
            Ok(other) => {
                anyhow::bail!("PROFILE_SOURCE must be 'proxy' or 'member', got '{other}'")
            }
        };

        Ok(Config {
            rapidapi_key: require_env("RAPIDAPI_KEY")?,
            rapidapi_host: require_env("RAPIDAPI_HOST")?,
            linkedin_api_username: require_env("LINKEDIN_API_USERNAME")?,
            linkedin_api_password: require_env("LINKEDIN_API_PASSWORD")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            profile_source,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
