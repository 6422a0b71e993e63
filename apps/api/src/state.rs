use std::sync::Arc;

use crate::config::Config;
use crate::discovery::service::DiscoveryService;
use crate::message::generator::MessageService;
use crate::profile::service::ProfileService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<ProfileService>,
    pub discovery: Arc<DiscoveryService>,
    pub messages: Arc<MessageService>,
    /// Deployment values; consumed at startup, kept for handlers that need them.
    #[allow(dead_code)]
    pub config: Config,
}
