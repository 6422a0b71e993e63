use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::prospect::Prospect;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectSearchRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub target_roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProspectSearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub prospects: Vec<Prospect>,
}

/// POST /api/prospects/search
///
/// An empty result set is a 200 with an explanatory message, not an error;
/// the scrape is best-effort by contract.
pub async fn handle_prospect_search(
    State(state): State<AppState>,
    Json(req): Json<ProspectSearchRequest>,
) -> Result<Json<ProspectSearchResponse>, AppError> {
    if req.company_name.trim().is_empty() || req.target_roles.is_empty() {
        return Err(AppError::Validation(
            "Company name and target roles are required".to_string(),
        ));
    }

    let prospects = state
        .discovery
        .discover(&req.company_name, &req.target_roles)
        .await;

    let message = prospects
        .is_empty()
        .then(|| "No prospects found".to_string());

    Ok(Json(ProspectSearchResponse { message, prospects }))
}
