use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::message::tone::Tone;
use crate::models::profile::ProfileRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageRequest {
    /// Client-supplied sender record, passed through to the prompt opaque.
    #[serde(default)]
    pub sender: Value,
    #[serde(default)]
    pub target_username: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageResponse {
    pub id: String,
    pub message: Value,
    pub profile_info: ProfileInfo,
}

/// Flattened target summary shown alongside the generated message.
#[derive(Debug, Serialize)]
pub struct ProfileInfo {
    pub name: String,
    pub company: String,
    pub position: String,
}

/// POST /api/generate-message
///
/// Fetches the target (through the cache), generates the message, and
/// reshapes both into the response. Generation failures land inside the
/// `message` field; only validation and unexpected internal errors fail
/// the request itself.
pub async fn handle_generate_message(
    State(state): State<AppState>,
    Json(req): Json<GenerateMessageRequest>,
) -> Result<Json<GenerateMessageResponse>, AppError> {
    if req.target_username.trim().is_empty() {
        return Err(AppError::Validation("Target username required".to_string()));
    }

    let record = state.profiles.get_or_fetch(&req.target_username).await;
    let message = state.messages.generate(&req.sender, &record, req.tone).await?;

    Ok(Json(GenerateMessageResponse {
        id: req.target_username,
        message,
        profile_info: profile_info(&record),
    }))
}

/// Name from basic info, company and position from the first experience
/// entry; "Unknown" wherever the profile has nothing to offer.
fn profile_info(record: &ProfileRecord) -> ProfileInfo {
    const UNKNOWN: &str = "Unknown";

    match record {
        ProfileRecord::Profile(profile) => {
            let first_experience = profile.experience.first();
            ProfileInfo {
                name: if profile.basic_info.name.is_empty() {
                    UNKNOWN.to_string()
                } else {
                    profile.basic_info.name.clone()
                },
                company: first_experience
                    .and_then(|exp| exp.company.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                position: first_experience
                    .and_then(|exp| exp.title.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
            }
        }
        ProfileRecord::Error { .. } => ProfileInfo {
            name: UNKNOWN.to_string(),
            company: UNKNOWN.to_string(),
            position: UNKNOWN.to_string(),
        },
    }
}
