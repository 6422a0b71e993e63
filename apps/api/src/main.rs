mod config;
mod discovery;
mod errors;
mod llm_client;
mod message;
mod models;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ProfileSourceKind};
use crate::discovery::filter::FormerEmployeeFilter;
use crate::discovery::search::GoogleSearchClient;
use crate::discovery::service::DiscoveryService;
use crate::llm_client::LlmClient;
use crate::message::generator::MessageService;
use crate::profile::cache::PROFILE_CACHE_TTL;
use crate::profile::service::ProfileService;
use crate::profile::source::{MemberApiSource, ProfileSource, ProxyApiSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outreach API v{}", env!("CARGO_PKG_VERSION"));

    // Select the active profile source (proxy by default — swap via PROFILE_SOURCE)
    let source: Arc<dyn ProfileSource> = match config.profile_source {
        ProfileSourceKind::Proxy => Arc::new(ProxyApiSource::new(
            config.rapidapi_key.clone(),
            config.rapidapi_host.clone(),
        )),
        ProfileSourceKind::Member => Arc::new(MemberApiSource::new(
            config.linkedin_api_username.clone(),
            config.linkedin_api_password.clone(),
        )),
    };
    info!("Profile source initialized: {:?}", config.profile_source);

    let profiles = Arc::new(ProfileService::new(source, PROFILE_CACHE_TTL));

    let discovery = Arc::new(DiscoveryService::new(
        Arc::new(GoogleSearchClient::new()),
        Arc::new(FormerEmployeeFilter),
    ));

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let messages = Arc::new(MessageService::new(llm));

    // Build app state
    let state = AppState {
        profiles,
        discovery,
        messages,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
