//! Time-bounded profile cache.
//!
//! Keyed by public handle. The lock covers only check-and-read and
//! write-back; fetching and normalizing run unsynchronized, so two
//! concurrent misses on the same key may both reach upstream and the last
//! writer wins. Entries are overwritten on refresh and never evicted;
//! memory grows with distinct handles seen until process restart.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use crate::models::profile::NormalizedProfile;

/// Fixed entry lifetime. Not configurable per call.
pub const PROFILE_CACHE_TTL: Duration = Duration::from_secs(3600);

struct CacheEntry {
    profile: NormalizedProfile,
    fetched_at: Instant,
}

pub struct ProfileCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ProfileCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns a clone of the cached profile when the entry is younger
    /// than the TTL. A stale entry reads as a miss and stays in place
    /// until the refreshed fetch overwrites it.
    pub fn get(&self, username: &str) -> Option<NormalizedProfile> {
        let entries = self.entries.lock().expect("profile cache lock poisoned");
        entries.get(username).and_then(|entry| {
            (entry.fetched_at.elapsed() < self.ttl).then(|| entry.profile.clone())
        })
    }

    /// Stores a freshly fetched profile, overwriting any previous entry.
    pub fn insert(&self, username: &str, profile: NormalizedProfile) {
        let mut entries = self.entries.lock().expect("profile cache lock poisoned");
        entries.insert(
            username.to_owned(),
            CacheEntry {
                profile,
                fetched_at: Instant::now(),
            },
        );
    }
}
