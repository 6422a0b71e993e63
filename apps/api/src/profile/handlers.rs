use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::ProfileRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FetchProfileRequest {
    #[serde(default)]
    pub username: String,
}

/// POST /api/fetch-profile
///
/// Returns the normalized profile for a public handle, or the handle's
/// error record when upstream fetch or extraction failed.
pub async fn handle_fetch_profile(
    State(state): State<AppState>,
    Json(req): Json<FetchProfileRequest>,
) -> Result<Json<ProfileRecord>, AppError> {
    if req.username.trim().is_empty() {
        return Err(AppError::Validation("Username required".to_string()));
    }

    let record = state.profiles.get_or_fetch(&req.username).await;
    Ok(Json(record))
}
