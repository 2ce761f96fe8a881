//! Axum route handlers for profile management and CV analysis.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::profiles::cv_parser::{parse_cv, CvAnalysis};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct GetProfileResponse {
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeCvRequest {
    pub cv_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeCvResponse {
    pub analysis: CvAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /save-profile
///
/// Persists a profile to the store and returns the stored representation
/// (including the generated id).
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    let stored = state
        .profiles
        .insert(&profile)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?
        .ok_or_else(|| AppError::Store("store returned no representation".to_string()))?;

    Ok(Json(SaveProfileResponse { profile: stored }))
}

/// GET /get-profile/:user_id
///
/// Fetch-by-id. Unlike the simulation route, a missing record here is a 404 —
/// the caller explicitly asked for this profile.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<GetProfileResponse>, AppError> {
    let profile = state
        .profiles
        .fetch(user_id)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Profile {user_id} not found")))?;

    Ok(Json(GetProfileResponse { profile }))
}

/// POST /analyze-cv
///
/// Parses raw CV text into a structured profile draft via the generative
/// provider.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeCvRequest>,
) -> Result<Json<AnalyzeCvResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }

    let analysis = parse_cv(&request.cv_text, state.generator.as_ref()).await?;

    Ok(Json(AnalyzeCvResponse { analysis }))
}
