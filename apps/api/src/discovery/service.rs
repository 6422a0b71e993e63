//! Prospect discovery pipeline.
//!
//! Flow per role: 3 query variants → SERP fetch → link extraction →
//! URL dedup → position filter → prospect record. A failed query is
//! skipped, never retried; total failure yields an empty list.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::discovery::filter::ProspectFilter;
use crate::discovery::parser::extract_profile_links;
use crate::discovery::search::SearchClient;
use crate::models::prospect::Prospect;

/// Inter-query pause to reduce the chance of upstream throttling.
const QUERY_DELAY: Duration = Duration::from_millis(500);

/// Restricts every query to the personal-profile path of the hosting domain.
const PROFILE_SITE_RESTRICTION: &str = "site:linkedin.com/in";

pub struct DiscoveryService {
    search: Arc<dyn SearchClient>,
    filter: Arc<dyn ProspectFilter>,
}

impl DiscoveryService {
    pub fn new(search: Arc<dyn SearchClient>, filter: Arc<dyn ProspectFilter>) -> Self {
        Self { search, filter }
    }

    /// Discovers current employees of `company_name` matching the given
    /// roles. Deduplicated by public id, first-seen order preserved.
    pub async fn discover(&self, company_name: &str, target_roles: &[String]) -> Vec<Prospect> {
        let mut prospects: Vec<Prospect> = Vec::new();
        let mut seen_urls: HashSet<String> = HashSet::new();

        for role in target_roles {
            for query in role_queries(role, company_name) {
                let body = match self.search.fetch_results(&query).await {
                    Ok(body) => body,
                    Err(e) => {
                        warn!("Search query '{query}' failed, skipping: {e}");
                        continue;
                    }
                };

                for link in extract_profile_links(&body) {
                    if !seen_urls.insert(link.url.clone()) {
                        continue;
                    }

                    let position = link.snippet.unwrap_or_else(|| role.clone());
                    if self.filter.excludes(&position) {
                        continue;
                    }

                    let name = if link.anchor_text.chars().count() >= 2 {
                        link.anchor_text
                    } else {
                        display_name_from_id(&link.public_id)
                    };

                    info!("Found prospect: {}", link.public_id);
                    prospects.push(Prospect {
                        name,
                        position,
                        company: company_name.to_string(),
                        linkedin_url: format!("https://www.linkedin.com/in/{}", link.public_id),
                        public_id: link.public_id,
                    });
                }

                tokio::time::sleep(QUERY_DELAY).await;
            }
        }

        let unique = dedup_by_public_id(prospects);
        info!("Found {} prospects", unique.len());
        unique
    }
}

/// Three phrasings per role, to maximize recall against an unstable index.
fn role_queries(role: &str, company: &str) -> [String; 3] {
    [
        format!("current {role} {company} {PROFILE_SITE_RESTRICTION}"),
        format!("{role} at {company} {PROFILE_SITE_RESTRICTION}"),
        format!("{company} {role} current {PROFILE_SITE_RESTRICTION}"),
    ]
}

/// Title-cased, hyphen-to-space rendering of a public id, used when the
/// anchor carried no usable display text.
fn display_name_from_id(public_id: &str) -> String {
    public_id
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn dedup_by_public_id(prospects: Vec<Prospect>) -> Vec<Prospect> {
    let mut seen = HashSet::new();
    prospects
        .into_iter()
        .filter(|prospect| seen.insert(prospect.public_id.clone()))
        .collect()
}
