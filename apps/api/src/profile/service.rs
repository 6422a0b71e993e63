//! Profile fetch orchestration over the cache and the active source.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::models::profile::ProfileRecord;
use crate::profile::cache::ProfileCache;
use crate::profile::normalize::normalize;
use crate::profile::source::ProfileSource;

pub struct ProfileService {
    source: Arc<dyn ProfileSource>,
    cache: ProfileCache,
}

impl ProfileService {
    pub fn new(source: Arc<dyn ProfileSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: ProfileCache::new(ttl),
        }
    }

    /// Returns the cached profile when fresh, otherwise fetches from
    /// upstream, normalizes, and caches the result.
    ///
    /// The cache lock covers only the lookup and the write-back; the fetch
    /// runs unsynchronized, so two concurrent misses on the same handle may
    /// both reach upstream and the last writer wins.
    ///
    /// Upstream and extraction failures are isolated into an error record
    /// for this handle; they never abort the surrounding request and are
    /// never cached.
    pub async fn get_or_fetch(&self, username: &str) -> ProfileRecord {
        if let Some(profile) = self.cache.get(username) {
            debug!("Profile cache hit for {username}");
            return ProfileRecord::Profile(profile);
        }

        info!("Fetching profile for {username}");
        let (raw, contact) = tokio::join!(
            self.source.fetch_profile(username),
            self.source.fetch_contact_info(username),
        );

        let raw = match raw {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Profile fetch for {username} failed: {e}");
                return ProfileRecord::from_error(e);
            }
        };
        let contact = match contact {
            Ok(contact) => contact,
            Err(e) => {
                warn!("Contact fetch for {username} failed: {e}");
                return ProfileRecord::from_error(e);
            }
        };

        match normalize(&raw, contact.as_ref()) {
            Ok(profile) => {
                self.cache.insert(username, profile.clone());
                ProfileRecord::Profile(profile)
            }
            Err(e) => {
                warn!("Normalization for {username} failed: {e}");
                ProfileRecord::from_error(e)
            }
        }
    }
}
