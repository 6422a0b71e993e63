use serde::{Deserialize, Serialize};

/// A discovered candidate profile matching a role/company search.
/// `public_id` is the dedup key across all queries in one discovery call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub name: String,
    pub position: String,
    pub company: String,
    pub linkedin_url: String,
    pub public_id: String,
}
