//! Deterministic recommendation and learning-path generators.
//!
//! No LLM involvement: both are pure functions of the profile analysis, so
//! the same analysis always produces the same plan.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{IndustryFocus, ProfileAnalysis};

/// Personalized suggestions grouped the way the dashboard consumes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub simulation_types: Vec<String>,
    pub skill_development: Vec<String>,
    pub career_advancement: Vec<String>,
    pub learning_resources: Vec<LearningResource>,
}

/// A single skill-gap study suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub skill: String,
    pub priority: String,
    pub estimated_time: String,
}

/// Builds recommendations from industry focus, experience depth, and gaps.
pub fn build_recommendations(analysis: &ProfileAnalysis) -> Recommendations {
    let mut recommendations = Recommendations::default();

    if analysis.industry_focus == IndustryFocus::Technology {
        recommendations.simulation_types.extend(
            [
                "code_review_scenarios",
                "technical_architecture_decisions",
                "debugging_challenges",
            ]
            .map(String::from),
        );
    }

    if analysis.experience_depth < 3 {
        recommendations.skill_development.extend(
            [
                "fundamentals_strengthening",
                "best_practices_learning",
                "mentorship_seeking",
            ]
            .map(String::from),
        );
    } else if analysis.experience_depth > 7 {
        recommendations.career_advancement.extend(
            [
                "leadership_training",
                "strategic_thinking_development",
                "team_building_skills",
            ]
            .map(String::from),
        );
    }

    for gap in &analysis.skill_gaps {
        recommendations.learning_resources.push(LearningResource {
            skill: gap.clone(),
            priority: "high".to_string(),
            estimated_time: "2-4 weeks".to_string(),
        });
    }

    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Learning path
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub phases: Vec<LearningPhase>,
    pub total_duration_weeks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub name: String,
    pub duration_weeks: u32,
    pub skills: Vec<String>,
    pub activities: Vec<LearningActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
}

fn activity(activity_type: &str, description: &str) -> LearningActivity {
    LearningActivity {
        activity_type: activity_type.to_string(),
        description: description.to_string(),
    }
}

/// Specialization phase name and skills per industry focus.
fn specialization(industry: IndustryFocus) -> (&'static str, &'static [&'static str]) {
    match industry {
        IndustryFocus::Technology => (
            "Yazılım Sistemleri",
            &["system design", "api architecture", "database optimization"],
        ),
        IndustryFocus::Design => (
            "UX/UI Tasarımı",
            &["user research", "design systems", "prototyping"],
        ),
        IndustryFocus::Management => (
            "Teknik Liderlik",
            &["team management", "technical strategy", "stakeholder communication"],
        ),
        IndustryFocus::Analytics => (
            "Veri Analitiği",
            &["statistical modelling", "data visualization", "experiment design"],
        ),
        IndustryFocus::IndustrialEngineering => (
            "Üretim Sistemleri",
            &["lean manufacturing", "capacity planning", "quality management"],
        ),
        IndustryFocus::MechanicalEngineering | IndustryFocus::ElectricalEngineering => (
            "Mühendislik Tasarımı",
            &["cad modelling", "simulation and testing", "design for manufacturing"],
        ),
        IndustryFocus::General => (
            "Genel Profesyonel Gelişim",
            &["problem solving", "communication", "project management"],
        ),
    }
}

/// Three-phase learning path with fixed durations. Phase 1 only exists when
/// the analysis surfaced skill gaps.
pub fn build_learning_path(analysis: &ProfileAnalysis) -> LearningPath {
    let mut phases = Vec::new();

    if !analysis.skill_gaps.is_empty() {
        phases.push(LearningPhase {
            name: "Temel Beceri Geliştirme".to_string(),
            duration_weeks: 4,
            skills: analysis.skill_gaps.iter().take(3).cloned().collect(),
            activities: vec![
                activity("tutorial", "İnteraktif öğrenme modülleri"),
                activity("practice", "Rehberli uygulama oturumları"),
                activity("assessment", "Beceri doğrulama testleri"),
            ],
        });
    }

    phases.push(LearningPhase {
        name: "İleri Seviye Uygulamalar".to_string(),
        duration_weeks: 6,
        skills: vec!["problem_solving".to_string(), "strategic_thinking".to_string()],
        activities: vec![
            activity("simulation", "Gerçek dünya senaryoları"),
            activity("project", "Uçtan uca proje tamamlama"),
            activity("peer_review", "Akran değerlendirmesi"),
        ],
    });

    let (name, skills) = specialization(analysis.industry_focus);
    phases.push(LearningPhase {
        name: format!("{name} Uzmanlığı"),
        duration_weeks: 8,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        activities: vec![
            activity("advanced_simulation", "Uzman seviyesi senaryolar"),
            activity("mentorship", "Sektör uzmanı yönlendirmesi"),
            activity("capstone", "Portfolyo projesi"),
        ],
    });

    let total_duration_weeks = phases.iter().map(|p| p.duration_weeks).sum();

    LearningPath {
        phases,
        total_duration_weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::analyze;
    use crate::models::profile::Profile;

    fn analysis_for(title: &str, degree: &str, level: &str) -> ProfileAnalysis {
        analyze(&Profile {
            current_title: (!title.is_empty()).then(|| title.to_string()),
            degree: (!degree.is_empty()).then(|| degree.to_string()),
            experience_level: (!level.is_empty()).then(|| level.to_string()),
            ..Profile::default()
        })
    }

    #[test]
    fn test_technology_profile_gets_code_simulations() {
        let recs = build_recommendations(&analysis_for("Backend Developer", "", "mid"));
        assert!(recs
            .simulation_types
            .contains(&"code_review_scenarios".to_string()));
    }

    #[test]
    fn test_shallow_experience_gets_fundamentals() {
        let recs = build_recommendations(&analysis_for("Developer", "", "junior"));
        assert!(recs
            .skill_development
            .contains(&"fundamentals_strengthening".to_string()));
        assert!(recs.career_advancement.is_empty());
    }

    #[test]
    fn test_gaps_become_learning_resources() {
        // Manager without code or soft skills trips the gap rules.
        let recs = build_recommendations(&analysis_for("Engineering Manager", "", "mid"));
        assert!(!recs.learning_resources.is_empty());
        assert!(recs.learning_resources.iter().all(|r| r.priority == "high"));
    }

    #[test]
    fn test_learning_path_totals_phase_durations() {
        let path = build_learning_path(&analysis_for("Engineering Manager", "", "mid"));
        let sum: u32 = path.phases.iter().map(|p| p.duration_weeks).sum();
        assert_eq!(path.total_duration_weeks, sum);
    }

    #[test]
    fn test_learning_path_skips_phase_one_without_gaps() {
        // Plain mid-level IC with no gap-triggering roles: two phases only.
        let path = build_learning_path(&analysis_for("Muhasebeci", "", "mid"));
        assert_eq!(path.phases.len(), 2);
        assert_eq!(path.phases[0].name, "İleri Seviye Uygulamalar");
    }

    #[test]
    fn test_specialization_follows_industry() {
        let path = build_learning_path(&analysis_for("", "Endüstri Mühendisliği", "mid"));
        assert!(path
            .phases
            .last()
            .unwrap()
            .name
            .starts_with("Üretim Sistemleri"));
    }

    #[test]
    fn test_recommendations_are_deterministic() {
        let analysis = analysis_for("Senior Developer", "Bilgisayar Mühendisliği", "senior");
        assert_eq!(build_recommendations(&analysis), build_recommendations(&analysis));
        assert_eq!(build_learning_path(&analysis), build_learning_path(&analysis));
    }
}
