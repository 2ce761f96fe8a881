//! Personalization parameters — difficulty ladder and per-user generation
//! controls derived from the analysis.
//!
//! `adapt_difficulty` is a pure, single-step mapping: one call moves at most
//! one rung on the ladder, and unknown difficulty strings pass through
//! unchanged rather than erroring.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{ExperienceLevel, RoleType};
use crate::models::profile::Profile;

/// Number of trailing scores considered when adapting difficulty.
pub const PERFORMANCE_WINDOW: usize = 5;

const PROMOTE_THRESHOLD: f32 = 85.0;
const DEMOTE_THRESHOLD: f32 = 60.0;

/// Scenario difficulty ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn parse(raw: &str) -> Option<Difficulty> {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// One rung up; Expert saturates.
    fn promote(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard | Difficulty::Expert => Difficulty::Expert,
        }
    }

    /// One rung down; Easy saturates.
    fn demote(self) -> Difficulty {
        match self {
            Difficulty::Expert => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
        }
    }
}

/// One completed-simulation score (0–100).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PerformanceRecord {
    #[serde(default)]
    pub score: f32,
}

/// Adapts the preferred difficulty against recent performance.
///
/// Mean of at most the last `PERFORMANCE_WINDOW` scores: above 85 steps one
/// level up, below 60 steps one level down, otherwise (or with no history)
/// the preference is returned unchanged. Unknown `preferred` strings pass
/// through untouched.
pub fn adapt_difficulty(history: &[PerformanceRecord], preferred: &str) -> String {
    if history.is_empty() {
        return preferred.to_string();
    }

    let Some(level) = Difficulty::parse(preferred) else {
        return preferred.to_string();
    };

    let recent = &history[history.len().saturating_sub(PERFORMANCE_WINDOW)..];
    let mean = recent.iter().map(|r| r.score).sum::<f32>() / recent.len() as f32;

    let adjusted = if mean > PROMOTE_THRESHOLD {
        level.promote()
    } else if mean < DEMOTE_THRESHOLD {
        level.demote()
    } else {
        level
    };

    adjusted.as_str().to_string()
}

/// Coarse trend over the trailing window, reported back to the caller of the
/// adaptive-scenario endpoint.
pub fn performance_trend(history: &[PerformanceRecord]) -> &'static str {
    if history.len() < 2 {
        return "insufficient_data";
    }
    let recent = &history[history.len().saturating_sub(PERFORMANCE_WINDOW)..];
    let mid = recent.len() / 2;
    let earlier_mean =
        recent[..mid].iter().map(|r| r.score).sum::<f32>() / mid.max(1) as f32;
    let later_mean = recent[mid..].iter().map(|r| r.score).sum::<f32>()
        / (recent.len() - mid) as f32;

    if later_mean > earlier_mean + 5.0 {
        "improving"
    } else if later_mean < earlier_mean - 5.0 {
        "declining"
    } else {
        "steady"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PersonalizationParams
// ────────────────────────────────────────────────────────────────────────────

/// Generation controls derived from the profile analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizationParams {
    pub difficulty_preference: Difficulty,
    pub learning_style: String,
    pub simulation_types: Vec<String>,
    pub feedback_style: String,
    pub collaboration_preference: String,
}

/// Derives the personalization parameters. Difficulty comes from experience
/// level with a breadth-of-skills secondary signal; learning and
/// collaboration styles come from the personality assessment when present.
pub fn derive_params(
    profile: &Profile,
    level: ExperienceLevel,
    role: RoleType,
    simulation_types: Vec<String>,
) -> PersonalizationParams {
    let skills_count = profile.skills.len();

    let difficulty_preference = if matches!(level, ExperienceLevel::Senior | ExperienceLevel::Lead)
        || skills_count > 15
    {
        Difficulty::Hard
    } else if level == ExperienceLevel::Mid || skills_count > 8 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    };

    let assessment = profile.personality_assessment.as_ref();

    let learning_style = assessment
        .and_then(|a| a.learning_style.clone())
        .unwrap_or_else(|| "mixed".to_string());

    let feedback_style = match role {
        RoleType::Junior | RoleType::JuniorEngineer => "detailed_supportive",
        RoleType::Management | RoleType::SeniorIndividualContributor => "direct_concise",
        _ => "balanced",
    }
    .to_string();

    let type_code = assessment
        .and_then(|a| a.personality_type.as_deref())
        .unwrap_or("")
        .to_uppercase();
    let collaboration_preference = if type_code.contains('E') {
        "collaborative".to_string()
    } else if type_code.contains('I') {
        "independent".to_string()
    } else {
        assessment
            .and_then(|a| a.work_style.clone())
            .unwrap_or_else(|| "mixed".to_string())
    };

    PersonalizationParams {
        difficulty_preference,
        learning_style,
        simulation_types,
        feedback_style,
        collaboration_preference,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
