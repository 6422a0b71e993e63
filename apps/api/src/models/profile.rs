//! Normalized profile records shared by the cache, the HTTP surface, and
//! the message generator.

use serde::{Deserialize, Serialize};

/// Compact, uniform representation of an upstream profile.
///
/// Empty sections are omitted from the serialized record to keep the
/// payload small for generation. The filter is shallow: fields inside
/// entries serialize as null when the source did not provide them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub basic_info: BasicInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<Experience>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<Education>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub honors: Vec<Honor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    /// Only populated by sources that expose contact data.
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: Option<String>,
    pub company: Option<String>,
    /// "{start year}-{end year}", with a literal "Present" for current roles.
    pub duration: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Honor {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub year: Option<i64>,
}

/// Outcome of a profile fetch: either the normalized record or an error
/// record isolated to that identifier. Upstream failures never abort the
/// surrounding request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileRecord {
    Profile(NormalizedProfile),
    Error { error: String },
}

impl ProfileRecord {
    pub fn from_error(err: impl std::fmt::Display) -> Self {
        ProfileRecord::Error {
            error: err.to_string(),
        }
    }
}
