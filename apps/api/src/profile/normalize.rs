//! Profile Normalizer.
//!
//! Converts a raw upstream payload into the compact `NormalizedProfile`,
//! tolerating missing keys at every level. The upstreams disagree on
//! nesting: the proxy API reports `position` entries with `start`/`end`
//! year objects and a `geo.full` location, the member API reports
//! `experience` entries with `timePeriod` date objects and a flat
//! `geoLocationName`. Both shapes map through this one code path.

use serde_json::Value;
use thiserror::Error;

use crate::models::profile::{BasicInfo, Education, Experience, Honor, NormalizedProfile};

// One cap policy across all sources. The upstream lists are assumed
// most-recent-first and are not re-sorted.
const MAX_EXPERIENCE_ENTRIES: usize = 5;
const MAX_EDUCATION_ENTRIES: usize = 2;
const MAX_SKILLS: usize = 10;
const MAX_HONORS: usize = 5;
const MAX_DESCRIPTION_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("upstream payload is not a JSON object")]
    NotAnObject,
}

/// Normalizes a raw profile payload plus an optional contact-info payload.
///
/// Never panics on missing or malformed nested fields; the only failure is
/// a payload that is not an object at the top level. Output depends on the
/// inputs alone, so normalizing the same payload twice is identical.
pub fn normalize(raw: &Value, contact: Option<&Value>) -> Result<NormalizedProfile, NormalizeError> {
    if !raw.is_object() {
        return Err(NormalizeError::NotAnObject);
    }

    let basic_info = BasicInfo {
        name: full_name(raw),
        industry: text(raw, "industryName"),
        location: raw
            .get("geo")
            .and_then(|geo| geo.get("full"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .or_else(|| text(raw, "geoLocationName")),
        headline: text(raw, "headline"),
        email: contact.and_then(|c| text(c, "email_address")),
    };

    let experience = entries(raw, &["position", "experience"])
        .iter()
        .take(MAX_EXPERIENCE_ENTRIES)
        .map(experience_entry)
        .collect();

    let education = entries(raw, &["educations", "education"])
        .iter()
        .take(MAX_EDUCATION_ENTRIES)
        .map(|edu| Education {
            school: text(edu, "schoolName"),
            degree: text(edu, "degree").or_else(|| text(edu, "degreeName")),
            field: text(edu, "fieldOfStudy"),
        })
        .collect();

    let skills = entries(raw, &["skills"])
        .iter()
        .take(MAX_SKILLS)
        .filter_map(|skill| text(skill, "name"))
        .collect();

    let honors = entries(raw, &["honors"])
        .iter()
        .take(MAX_HONORS)
        .map(|honor| Honor {
            title: text(honor, "title"),
            issuer: text(honor, "issuer"),
            year: honor
                .get("issueDate")
                .and_then(|date| date.get("year"))
                .and_then(Value::as_i64),
        })
        .collect();

    Ok(NormalizedProfile {
        basic_info,
        experience,
        education,
        skills,
        honors,
    })
}

/// "first last" with a single separating space, trimmed when either part
/// is absent.
fn full_name(raw: &Value) -> String {
    let first = raw.get("firstName").and_then(Value::as_str).unwrap_or_default();
    let last = raw.get("lastName").and_then(Value::as_str).unwrap_or_default();
    format!("{first} {last}").trim().to_string()
}

fn experience_entry(exp: &Value) -> Experience {
    Experience {
        title: text(exp, "title"),
        company: text(exp, "companyName"),
        duration: duration(exp),
        location: text(exp, "location").or_else(|| text(exp, "locationName")),
        description: text(exp, "description")
            .map(|d| d.chars().take(MAX_DESCRIPTION_CHARS).collect()),
    }
}

/// "{start year}-{end year}", with a literal "Present" when the role has
/// no end date. A missing start year collapses to an empty prefix.
fn duration(exp: &Value) -> String {
    let start = year_of(exp, "start", "startDate")
        .map(|y| y.to_string())
        .unwrap_or_default();
    let end = year_of(exp, "end", "endDate")
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Present".to_string());
    format!("{start}-{end}")
}

/// Reads a year from either the proxy shape (`{flat}.year`) or the member
/// shape (`timePeriod.{nested}.year`).
fn year_of(exp: &Value, flat: &str, nested: &str) -> Option<i64> {
    exp.get(flat)
        .and_then(|date| date.get("year"))
        .and_then(Value::as_i64)
        .or_else(|| {
            exp.get("timePeriod")
                .and_then(|period| period.get(nested))
                .and_then(|date| date.get("year"))
                .and_then(Value::as_i64)
        })
}

fn text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Returns the first array found under any of the candidate keys; the
/// proxy and member APIs name the same lists differently.
fn entries<'a>(value: &'a Value, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proxy_shape_normalizes_name_and_duration() {
        let raw = json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "position": [{
                "title": "Engineer",
                "companyName": "Acme",
                "start": {"year": 2020}
            }]
        });

        let profile = normalize(&raw, None).unwrap();
        assert_eq!(profile.basic_info.name, "Ada Lovelace");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].duration, "2020-Present");
        assert_eq!(profile.experience[0].title.as_deref(), Some("Engineer"));
        assert_eq!(profile.experience[0].company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_member_shape_normalizes_time_period_and_location() {
        let raw = json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "geoLocationName": "Arlington, Virginia",
            "experience": [{
                "title": "Research Fellow",
                "companyName": "Navy",
                "timePeriod": {
                    "startDate": {"year": 1943},
                    "endDate": {"year": 1946}
                },
                "locationName": "Washington, D.C."
            }],
            "education": [{
                "schoolName": "Yale",
                "degreeName": "PhD",
                "fieldOfStudy": "Mathematics"
            }]
        });

        let profile = normalize(&raw, None).unwrap();
        assert_eq!(
            profile.basic_info.location.as_deref(),
            Some("Arlington, Virginia")
        );
        assert_eq!(profile.experience[0].duration, "1943-1946");
        assert_eq!(
            profile.experience[0].location.as_deref(),
            Some("Washington, D.C.")
        );
        assert_eq!(profile.education[0].degree.as_deref(), Some("PhD"));
    }

    #[test]
    fn test_geo_full_takes_precedence_over_flat_location() {
        let raw = json!({
            "firstName": "A",
            "geo": {"full": "Berlin, Germany"},
            "geoLocationName": "Somewhere else"
        });
        let profile = normalize(&raw, None).unwrap();
        assert_eq!(profile.basic_info.location.as_deref(), Some("Berlin, Germany"));
    }

    #[test]
    fn test_email_comes_only_from_contact_payload() {
        let raw = json!({"firstName": "Ada", "email_address": "not-this@example.com"});
        let contact = json!({"email_address": "ada@example.com"});

        let without = normalize(&raw, None).unwrap();
        assert_eq!(without.basic_info.email, None);

        let with = normalize(&raw, Some(&contact)).unwrap();
        assert_eq!(with.basic_info.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_missing_everything_yields_empty_sections_not_panic() {
        let profile = normalize(&json!({}), None).unwrap();
        assert_eq!(profile.basic_info.name, "");
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.honors.is_empty());
    }

    #[test]
    fn test_empty_sections_are_omitted_from_serialization() {
        let profile = normalize(&json!({"firstName": "Ada"}), None).unwrap();
        let value = serde_json::to_value(&profile).unwrap();

        assert!(value.get("basic_info").is_some());
        assert!(value.get("experience").is_none());
        assert!(value.get("education").is_none());
        assert!(value.get("skills").is_none());
        assert!(value.get("honors").is_none());
    }

    #[test]
    fn test_filter_is_shallow_nested_fields_serialize_as_null() {
        let raw = json!({
            "firstName": "Ada",
            "position": [{"title": "Engineer"}]
        });
        let profile = normalize(&raw, None).unwrap();
        let value = serde_json::to_value(&profile).unwrap();

        let entry = &value["experience"][0];
        assert_eq!(entry["company"], serde_json::Value::Null);
        assert_eq!(entry["duration"], "-Present");
    }

    #[test]
    fn test_description_truncated_to_200_chars() {
        let long = "x".repeat(250);
        let raw = json!({"position": [{"description": long}]});
        let profile = normalize(&raw, None).unwrap();
        assert_eq!(
            profile.experience[0].description.as_ref().unwrap().chars().count(),
            200
        );
    }

    #[test]
    fn test_list_caps_are_applied_in_source_order() {
        let positions: Vec<_> = (0..8)
            .map(|i| json!({"title": format!("Role {i}")}))
            .collect();
        let skills: Vec<_> = (0..15).map(|i| json!({"name": format!("Skill {i}")})).collect();
        let raw = json!({"position": positions, "skills": skills});

        let profile = normalize(&raw, None).unwrap();
        assert_eq!(profile.experience.len(), 5);
        assert_eq!(profile.experience[0].title.as_deref(), Some("Role 0"));
        assert_eq!(profile.skills.len(), 10);
        assert_eq!(profile.skills[0], "Skill 0");
    }

    #[test]
    fn test_honor_year_read_from_issue_date() {
        let raw = json!({
            "honors": [{"title": "Turing Award", "issuer": "ACM", "issueDate": {"year": 2006}}]
        });
        let profile = normalize(&raw, None).unwrap();
        assert_eq!(profile.honors[0].year, Some(2006));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "headline": "Analyst",
            "position": [{"title": "Engineer", "start": {"year": 2020}}],
            "skills": [{"name": "Mathematics"}]
        });
        let first = normalize(&raw, None).unwrap();
        let second = normalize(&raw, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_object_payload_is_an_error() {
        assert!(normalize(&json!([1, 2, 3]), None).is_err());
        assert!(normalize(&json!("nope"), None).is_err());
    }
}
