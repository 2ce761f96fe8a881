//! Axum route handlers for the simulation and analysis API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::analyzer::ProfileAnalysis;
use crate::analysis::personalization::{
    adapt_difficulty, performance_trend, Difficulty, PerformanceRecord,
};
use crate::analysis::recommendations::{
    build_learning_path, build_recommendations, LearningPath, Recommendations,
};
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::simulation::generator::{analysis_for, run_pipeline, synthesize_scenario, PipelineOutcome};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProfileAnalysisResponse {
    pub analysis: ProfileAnalysis,
    pub recommendations: Recommendations,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct AdaptiveScenarioRequest {
    #[serde(default)]
    pub performance_history: Vec<PerformanceRecord>,
    #[serde(default = "default_difficulty")]
    pub preferred_difficulty: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

#[derive(Debug, Serialize)]
pub struct AdaptiveScenarioResponse {
    #[serde(flatten)]
    pub outcome: PipelineOutcome,
    pub difficulty_level: String,
    pub personalization_factors: PersonalizationFactors,
}

#[derive(Debug, Serialize)]
pub struct PersonalizationFactors {
    pub user_level: Option<String>,
    pub focus_areas: Vec<String>,
    pub performance_trend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub learning_path: LearningPath,
    pub estimated_duration_weeks: u32,
    pub skill_priorities: Vec<String>,
    pub career_trajectory: crate::analysis::analyzer::CareerTrajectory,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /career-simulation/:user_id
///
/// The core operation: always answers with a schema-complete scenario,
/// flagged as generated or fallback. A missing profile degrades to a generic
/// analysis instead of a 404.
pub async fn handle_career_simulation(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<PipelineOutcome>, AppError> {
    let outcome = synthesize_scenario(&state, user_id).await?;
    Ok(Json(outcome))
}

/// POST /profile-analysis/:user_id
///
/// Detailed profile analysis plus deterministic recommendations.
pub async fn handle_profile_analysis(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileAnalysisResponse>, AppError> {
    let profile = fetch_profile_or_404(&state, user_id).await?;
    let analysis = analysis_for(&profile);
    let recommendations = build_recommendations(&analysis);

    Ok(Json(ProfileAnalysisResponse {
        analysis,
        recommendations,
        updated_at: Utc::now(),
    }))
}

/// POST /adaptive-scenario/:user_id
///
/// Runs the pipeline with the difficulty adapted to recent performance.
pub async fn handle_adaptive_scenario(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<AdaptiveScenarioRequest>,
) -> Result<Json<AdaptiveScenarioResponse>, AppError> {
    let profile = fetch_profile_or_404(&state, user_id).await?;

    let adjusted = adapt_difficulty(&request.performance_history, &request.preferred_difficulty);
    let override_level = Difficulty::parse(&adjusted);

    let outcome = run_pipeline(&profile, state.generator.as_ref(), override_level).await;

    Ok(Json(AdaptiveScenarioResponse {
        outcome,
        difficulty_level: adjusted,
        personalization_factors: PersonalizationFactors {
            user_level: profile.experience_level.clone(),
            focus_areas: request.focus_areas,
            performance_trend: performance_trend(&request.performance_history),
        },
    }))
}

/// GET /learning-path/:user_id
///
/// Deterministic, phase-based learning path from the profile analysis.
pub async fn handle_learning_path(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let profile = fetch_profile_or_404(&state, user_id).await?;
    let analysis = analysis_for(&profile);
    let learning_path = build_learning_path(&analysis);
    let estimated_duration_weeks = learning_path.total_duration_weeks;

    Ok(Json(LearningPathResponse {
        learning_path,
        estimated_duration_weeks,
        skill_priorities: analysis.skill_gaps.clone(),
        career_trajectory: analysis.career_trajectory,
    }))
}

async fn fetch_profile_or_404(state: &AppState, user_id: Uuid) -> Result<Profile, AppError> {
    state
        .profiles
        .fetch(user_id)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Profile {user_id} not found")))
}
