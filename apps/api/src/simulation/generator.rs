//! Scenario synthesis orchestration.
//!
//! State machine: ANALYZE → SYNTHESIZE → GENERATE → EXTRACT → VALIDATE →
//! {ACCEPT | FALLBACK}. Single-shot by design: any generation, extraction, or
//! consistency failure selects the fallback bank immediately — no re-prompt.
//! Fallback is a successful response; only unexpected internal faults surface
//! to the caller as errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyzer::{analyze, ProfileAnalysis};
use crate::analysis::personalization::Difficulty;
use crate::errors::AppError;
use crate::llm_client::{GenerationConfig, LlmError, TextGenerator};
use crate::models::profile::Profile;
use crate::models::scenario::GeneratedScenario;
use crate::simulation::extractor::{extract, ExtractionError};
use crate::simulation::fallback::fallback_scenario;
use crate::simulation::prompts::build_scenario_prompt;
use crate::simulation::validator::validate;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Pipeline error taxonomy (consumed internally — every variant has a
// deterministic substitute)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("domain mismatch: {0}")]
    Inconsistent(String),
}

impl PipelineError {
    /// Stable reason code reported alongside fallback responses.
    pub fn fallback_reason(&self) -> &'static str {
        match self {
            PipelineError::Generation(_) => "generation_failure",
            PipelineError::Extraction(_) => "extraction_failure",
            PipelineError::Inconsistent(_) => "consistency_mismatch",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Outcome
// ────────────────────────────────────────────────────────────────────────────

/// Where the returned scenario came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioSource {
    Generated,
    Fallback,
}

/// The pipeline's result: always a schema-complete scenario, flagged with its
/// origin. `fallback_reason` is set only for fallback responses.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub scenario: GeneratedScenario,
    pub source: ScenarioSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full pipeline for an already-fetched profile. Total: every
/// failure path resolves to a fallback scenario.
pub async fn run_pipeline(
    profile: &Profile,
    generator: &dyn TextGenerator,
    difficulty_override: Option<Difficulty>,
) -> PipelineOutcome {
    // ANALYZE
    let mut analysis = analyze(profile);
    if let Some(difficulty) = difficulty_override {
        analysis.personalization_params.difficulty_preference = difficulty;
    }

    // SYNTHESIZE
    let prompt = build_scenario_prompt(profile, &analysis);

    // GENERATE → EXTRACT → VALIDATE
    match generate_and_validate(profile, generator, &prompt).await {
        Ok(scenario) => {
            info!("scenario accepted from provider: {}", scenario.title);
            PipelineOutcome {
                scenario,
                source: ScenarioSource::Generated,
                fallback_reason: None,
            }
        }
        Err(err) => {
            warn!("pipeline degraded to fallback ({}): {err}", err.fallback_reason());
            PipelineOutcome {
                scenario: fallback_scenario(profile),
                source: ScenarioSource::Fallback,
                fallback_reason: Some(err.fallback_reason().to_string()),
            }
        }
    }
}

async fn generate_and_validate(
    profile: &Profile,
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<GeneratedScenario, PipelineError> {
    let raw = generator
        .generate(prompt, GenerationConfig::SCENARIO)
        .await?;

    let payload = extract(&raw)?;

    // Missing fields are a provider contract violation, handled as extraction
    // failures: the caller must never see a partial scenario.
    let scenario: GeneratedScenario = serde_json::from_value(payload)
        .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    if !scenario.is_schema_complete() {
        return Err(PipelineError::Extraction(ExtractionError::Malformed(
            "scenario has no decision options".to_string(),
        )));
    }

    validate(&scenario, profile).map_err(|mismatch| PipelineError::Inconsistent(mismatch.reason))?;

    Ok(scenario)
}

/// The caller-facing operation: fetch the profile, run the pipeline.
///
/// A missing or unreachable profile is recovered locally (generic analysis,
/// never a 404 on this route). Only unexpected internal faults become errors.
pub async fn synthesize_scenario(
    state: &AppState,
    user_id: Uuid,
) -> Result<PipelineOutcome, AppError> {
    let profile = match state.profiles.fetch(user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            warn!("profile {user_id} not found; degrading to generic analysis");
            Profile::default()
        }
        Err(e) => {
            warn!("profile store unavailable ({e}); degrading to generic analysis");
            Profile::default()
        }
    };

    Ok(run_pipeline(&profile, state.generator.as_ref(), None).await)
}

/// Returns the analysis the pipeline would use — exposed for the analysis and
/// learning-path endpoints so they share one classification path.
pub fn analysis_for(profile: &Profile) -> ProfileAnalysis {
    analyze(profile)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
