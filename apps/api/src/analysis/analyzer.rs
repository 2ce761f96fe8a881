//! Profile Analyzer — classifies a raw profile into a structured analysis.
//!
//! `analyze()` is total: it never fails, and missing data degrades to the
//! most generic classification instead of erroring. All taxonomies are
//! closed enums so exhaustiveness is compiler-checked; the keyword tables
//! below are the only place matching rules live.
//!
//! Keyword lists carry both Turkish and English forms because profiles mix
//! both ("Endüstri Mühendisliği", "Backend Developer").

use serde::{Deserialize, Serialize};

use crate::analysis::personalization::{derive_params, PersonalizationParams};
use crate::models::profile::{Experience, Profile};

// ────────────────────────────────────────────────────────────────────────────
// Taxonomies
// ────────────────────────────────────────────────────────────────────────────

/// Industry focus — closed set, first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryFocus {
    Technology,
    Design,
    Management,
    Analytics,
    IndustrialEngineering,
    MechanicalEngineering,
    ElectricalEngineering,
    General,
}

/// Role type derived from title seniority markers and experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    IndividualContributor,
    SeniorIndividualContributor,
    Management,
    Junior,
    JuniorEngineer,
    General,
}

/// Career trajectory inferred from experience level and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerTrajectory {
    Stable,
    Growing,
    Expert,
    ManagementTrack,
}

/// Parsed experience level; the wire value is free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
    Unknown,
}

impl ExperienceLevel {
    pub fn parse(raw: Option<&str>) -> ExperienceLevel {
        match raw.unwrap_or("").trim().to_lowercase().as_str() {
            "junior" | "entry" => ExperienceLevel::Junior,
            "mid" => ExperienceLevel::Mid,
            "senior" => ExperienceLevel::Senior,
            "lead" => ExperienceLevel::Lead,
            _ => ExperienceLevel::Unknown,
        }
    }
}

/// Domain family used for wholesale simulation-type overrides and
/// fallback-bank dispatch (coarser than `IndustryFocus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainFamily {
    Industrial,
    Software,
    Mechanical,
    General,
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword tables
// ────────────────────────────────────────────────────────────────────────────

const INDUSTRIAL_KEYWORDS: &[&str] = &["endüstri", "industrial"];
const MECHANICAL_KEYWORDS: &[&str] = &["makine", "mechanical"];
const ELECTRICAL_KEYWORDS: &[&str] = &["elektrik", "electrical"];
const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "programmer",
    "software",
    "yazılım",
    "geliştirici",
    "bilgisayar",
];
const DESIGN_KEYWORDS: &[&str] = &["designer", "ux", "ui", "tasarım"];
const MANAGEMENT_KEYWORDS: &[&str] = &["manager", "lead", "director", "müdür", "yönetici"];
const ANALYTICS_KEYWORDS: &[&str] = &["analyst", "data", "research", "analist", "veri"];

const SOFTWARE_FIELD_KEYWORDS: &[&str] = &["bilgisayar", "computer", "yazılım", "software"];

const MANAGEMENT_TITLE_KEYWORDS: &[&str] = &["manager", "director", "head", "müdür", "yönetici"];
const SENIOR_TITLE_KEYWORDS: &[&str] = &["senior", "lead", "principal", "kıdemli"];
const JUNIOR_TITLE_KEYWORDS: &[&str] = &["junior", "intern", "entry", "stajyer"];

const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python", "javascript", "typescript", "java", "c", "c++", "c#", "go", "rust", "swift",
    "kotlin", "php", "ruby", "sql", "matlab",
];
const FRAMEWORKS: &[&str] = &[
    "react", "angular", "vue", "django", "flask", "spring", "express", "laravel", ".net",
    "rails", "flutter",
];
const TOOLS: &[&str] = &[
    "git", "docker", "kubernetes", "jira", "excel", "sap", "autocad", "solidworks", "figma",
    "postman", "jenkins", "tableau", "power bi", "minitab", "ansys", "simulink",
];

// Baseline tools injected when an engineering graduate lists no software at
// all — their education implies these even when the skills list is empty.
const INDUSTRIAL_BASELINE_TOOLS: &[&str] = &["Excel", "SAP ERP", "MS Project", "Minitab", "AutoCAD"];
const MECHANICAL_BASELINE_TOOLS: &[&str] = &["SolidWorks", "AutoCAD", "ANSYS", "MATLAB"];
const ELECTRICAL_BASELINE_TOOLS: &[&str] = &["MATLAB", "Simulink", "Proteus", "AutoCAD Electrical"];

/// Letter → soft-skill tags, processed in this fixed order for determinism.
const PERSONALITY_TRAIT_TAGS: &[(char, &[&str])] = &[
    ('E', &["communication", "leadership"]),
    ('I', &["deep_focus", "independent_work"]),
    ('S', &["attention_to_detail", "practical_thinking"]),
    ('N', &["strategic_thinking", "innovation"]),
    ('T', &["analytical_thinking", "objective_decisions"]),
    ('F', &["empathy", "team_harmony"]),
    ('J', &["planning", "organization"]),
    ('P', &["adaptability", "flexibility"]),
];

const DEFAULT_SIMULATION_TYPES: &[&str] = &[
    "email_communication",
    "team_meeting",
    "problem_solving",
    "time_management",
];
const INDUSTRIAL_SIMULATION_TYPES: &[&str] = &[
    "production_planning",
    "quality_control",
    "process_improvement",
    "supplier_coordination",
];
const SOFTWARE_SIMULATION_TYPES: &[&str] = &[
    "code_review",
    "debugging",
    "sprint_planning",
    "incident_response",
];
const MECHANICAL_SIMULATION_TYPES: &[&str] = &[
    "design_review",
    "prototype_testing",
    "cad_modeling",
    "maintenance_planning",
];
const JUNIOR_SIMULATION_TYPES: &[&str] = &["onboarding_task", "mentored_assignment"];
const LEADERSHIP_SIMULATION_TYPES: &[&str] = &["strategic_planning", "team_leadership"];

// ────────────────────────────────────────────────────────────────────────────
// Analysis output
// ────────────────────────────────────────────────────────────────────────────

/// Skill tokens classified into exactly one technical category.
/// Unmatched tokens are dropped here (they remain in the raw skills list).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSkills {
    pub programming_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

/// Structured, ephemeral analysis of one profile. Recomputed per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub industry_focus: IndustryFocus,
    pub role_type: RoleType,
    pub technical_skills: TechnicalSkills,
    pub soft_skills: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub career_trajectory: CareerTrajectory,
    /// 1–10, from summed experience durations.
    pub experience_depth: u8,
    pub personalization_params: PersonalizationParams,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes a profile. Pure and total — identical input yields identical
/// output, and the sparsest possible profile still classifies.
pub fn analyze(profile: &Profile) -> ProfileAnalysis {
    let title = fold_lower(profile.title_text());
    let field = fold_lower(profile.field_of_study());
    let level = ExperienceLevel::parse(profile.experience_level.as_deref());

    let industry_focus = classify_industry(&title, &field);
    let engineering_field = is_engineering_field(&field);
    let role_type = classify_role(&title, level, engineering_field);
    let technical_skills = categorize_skills(&profile.skills, &field);
    let soft_skills = soft_skills_from_personality(
        profile
            .personality_assessment
            .as_ref()
            .and_then(|a| a.personality_type.as_deref())
            .unwrap_or(""),
    );
    let skill_gaps = identify_skill_gaps(role_type, industry_focus, &technical_skills, &soft_skills);
    let career_trajectory = classify_trajectory(&title, level);
    let experience_depth = experience_depth(&profile.experiences);
    let simulation_types = simulation_types(&field, level);
    let personalization_params = derive_params(profile, level, role_type, simulation_types);

    ProfileAnalysis {
        industry_focus,
        role_type,
        technical_skills,
        soft_skills,
        skill_gaps,
        career_trajectory,
        experience_depth,
        personalization_params,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Classification rules
// ────────────────────────────────────────────────────────────────────────────

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Lowercases with Turkish dotted-capital folding: "İ" becomes a plain "i"
/// instead of "i" + U+0307, which would defeat substring matching on
/// all-caps Turkish input.
pub fn fold_lower(text: &str) -> String {
    text.to_lowercase().replace('\u{0307}', "")
}

/// Ordered keyword match over title, then field of study.
/// Engineering-field checks run before the technology check so that
/// "Industrial Engineering" does not fall into Technology via "engineer".
pub fn classify_industry(title: &str, field_of_study: &str) -> IndustryFocus {
    for text in [title, field_of_study] {
        if text.trim().is_empty() {
            continue;
        }
        if contains_any(text, INDUSTRIAL_KEYWORDS) {
            return IndustryFocus::IndustrialEngineering;
        }
        if contains_any(text, MECHANICAL_KEYWORDS) {
            return IndustryFocus::MechanicalEngineering;
        }
        if contains_any(text, ELECTRICAL_KEYWORDS) {
            return IndustryFocus::ElectricalEngineering;
        }
        if contains_any(text, TECHNOLOGY_KEYWORDS) {
            return IndustryFocus::Technology;
        }
        if contains_any(text, DESIGN_KEYWORDS) {
            return IndustryFocus::Design;
        }
        if contains_any(text, MANAGEMENT_KEYWORDS) {
            return IndustryFocus::Management;
        }
        if contains_any(text, ANALYTICS_KEYWORDS) {
            return IndustryFocus::Analytics;
        }
    }
    IndustryFocus::General
}

/// Does the field of study belong to any engineering keyword set?
pub fn is_engineering_field(field_of_study: &str) -> bool {
    contains_any(field_of_study, INDUSTRIAL_KEYWORDS)
        || contains_any(field_of_study, MECHANICAL_KEYWORDS)
        || contains_any(field_of_study, ELECTRICAL_KEYWORDS)
}

/// Role classification. Management markers outrank seniority markers so
/// "Senior Engineering Manager" classifies as management.
pub fn classify_role(
    title: &str,
    level: ExperienceLevel,
    engineering_field: bool,
) -> RoleType {
    if contains_any(title, MANAGEMENT_TITLE_KEYWORDS) {
        return RoleType::Management;
    }
    if contains_any(title, SENIOR_TITLE_KEYWORDS) {
        return RoleType::SeniorIndividualContributor;
    }
    if contains_any(title, JUNIOR_TITLE_KEYWORDS) || level == ExperienceLevel::Junior {
        return if engineering_field {
            RoleType::JuniorEngineer
        } else {
            RoleType::Junior
        };
    }
    if title.trim().is_empty() {
        RoleType::General
    } else {
        RoleType::IndividualContributor
    }
}

/// Coarse family of a field-of-study (or title) string.
pub fn domain_family(text: &str) -> DomainFamily {
    let lowered = fold_lower(text);
    if contains_any(&lowered, INDUSTRIAL_KEYWORDS) {
        DomainFamily::Industrial
    } else if contains_any(&lowered, SOFTWARE_FIELD_KEYWORDS) {
        DomainFamily::Software
    } else if contains_any(&lowered, MECHANICAL_KEYWORDS)
        || contains_any(&lowered, ELECTRICAL_KEYWORDS)
    {
        DomainFamily::Mechanical
    } else {
        DomainFamily::General
    }
}

/// Classifies each skill token into exactly one category by case-insensitive
/// exact membership; unmatched tokens are dropped. Engineering graduates with
/// no tools get the baseline set for their field.
fn categorize_skills(skills: &[String], field_of_study: &str) -> TechnicalSkills {
    let mut result = TechnicalSkills::default();

    for skill in skills {
        let lowered = skill.trim().to_lowercase();
        if PROGRAMMING_LANGUAGES.contains(&lowered.as_str()) {
            result.programming_languages.push(skill.clone());
        } else if FRAMEWORKS.contains(&lowered.as_str()) {
            result.frameworks.push(skill.clone());
        } else if TOOLS.contains(&lowered.as_str()) {
            result.tools.push(skill.clone());
        }
    }

    if result.tools.is_empty() {
        let baseline: Option<&[&str]> = if contains_any(field_of_study, INDUSTRIAL_KEYWORDS) {
            Some(INDUSTRIAL_BASELINE_TOOLS)
        } else if contains_any(field_of_study, MECHANICAL_KEYWORDS) {
            Some(MECHANICAL_BASELINE_TOOLS)
        } else if contains_any(field_of_study, ELECTRICAL_KEYWORDS) {
            Some(ELECTRICAL_BASELINE_TOOLS)
        } else {
            None
        };
        if let Some(tools) = baseline {
            result.tools = tools.iter().map(|t| t.to_string()).collect();
        }
    }

    result
}

/// Soft skills from the MBTI-style code via letter presence. Fixed table
/// order, deduplicated, order-preserving. Empty code → empty set.
fn soft_skills_from_personality(type_code: &str) -> Vec<String> {
    let code = type_code.trim().to_uppercase();
    let mut tags: Vec<String> = Vec::new();
    for (letter, letter_tags) in PERSONALITY_TRAIT_TAGS {
        if code.contains(*letter) {
            for tag in *letter_tags {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
        }
    }
    tags
}

/// Up to three gaps from three independent rules, evaluated in fixed order.
fn identify_skill_gaps(
    role: RoleType,
    industry: IndustryFocus,
    technical: &TechnicalSkills,
    soft_skills: &[String],
) -> Vec<String> {
    let mut gaps = Vec::new();

    if matches!(
        role,
        RoleType::SeniorIndividualContributor | RoleType::Management
    ) && technical.programming_languages.is_empty()
    {
        gaps.push("technical_leadership".to_string());
    }
    if industry == IndustryFocus::Technology && technical.frameworks.is_empty() {
        gaps.push("modern_frameworks".to_string());
    }
    if role == RoleType::Management && !soft_skills.iter().any(|s| s == "leadership") {
        gaps.push("leadership_skills".to_string());
    }

    gaps.truncate(3);
    gaps
}

/// Trajectory rules in fixed order: level before title.
pub fn classify_trajectory(title: &str, level: ExperienceLevel) -> CareerTrajectory {
    match level {
        ExperienceLevel::Junior => CareerTrajectory::Growing,
        ExperienceLevel::Senior | ExperienceLevel::Lead => CareerTrajectory::Expert,
        _ => {
            if title.contains("manager") || title.contains("müdür") {
                CareerTrajectory::ManagementTrack
            } else {
                CareerTrajectory::Stable
            }
        }
    }
}

/// Sums declared experience durations into a 1–10 depth score.
/// "3 years" / "3 yıl" count as stated; anything unparseable counts as half
/// a year, and no experience at all is depth 1.
fn experience_depth(experiences: &[Experience]) -> u8 {
    if experiences.is_empty() {
        return 1;
    }

    let mut total_years = 0.0_f32;
    for exp in experiences {
        let duration = exp
            .duration
            .as_deref()
            .unwrap_or("")
            .to_lowercase();
        if duration.contains("year") || duration.contains("yıl") {
            let years = duration
                .split_whitespace()
                .next()
                .and_then(|token| token.parse::<f32>().ok())
                .unwrap_or(1.0);
            total_years += years;
        } else {
            total_years += 0.5;
        }
    }

    (total_years.floor() as i64).clamp(1, 10) as u8
}

/// Scenario archetypes: base list chosen wholesale by field family, then
/// extended (not replaced) by experience level.
fn simulation_types(field_of_study: &str, level: ExperienceLevel) -> Vec<String> {
    let base: &[&str] = match domain_family(field_of_study) {
        DomainFamily::Industrial => INDUSTRIAL_SIMULATION_TYPES,
        DomainFamily::Software => SOFTWARE_SIMULATION_TYPES,
        DomainFamily::Mechanical => MECHANICAL_SIMULATION_TYPES,
        DomainFamily::General => DEFAULT_SIMULATION_TYPES,
    };

    let mut types: Vec<String> = Vec::new();
    match level {
        ExperienceLevel::Junior => {
            types.extend(JUNIOR_SIMULATION_TYPES.iter().map(|t| t.to_string()));
            types.extend(base.iter().map(|t| t.to_string()));
        }
        ExperienceLevel::Senior | ExperienceLevel::Lead => {
            types.extend(base.iter().map(|t| t.to_string()));
            types.extend(LEADERSHIP_SIMULATION_TYPES.iter().map(|t| t.to_string()));
        }
        _ => types.extend(base.iter().map(|t| t.to_string())),
    }
    types
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::PersonalityAssessment;

    fn profile(title: &str, degree: &str, level: &str) -> Profile {
        Profile {
            current_title: (!title.is_empty()).then(|| title.to_string()),
            degree: (!degree.is_empty()).then(|| degree.to_string()),
            experience_level: (!level.is_empty()).then(|| level.to_string()),
            ..Profile::default()
        }
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let p = Profile {
            current_title: Some("Senior Backend Developer".to_string()),
            degree: Some("Bilgisayar Mühendisliği".to_string()),
            experience_level: Some("senior".to_string()),
            skills: vec!["Python".to_string(), "React".to_string(), "Git".to_string()],
            ..Profile::default()
        };
        assert_eq!(analyze(&p), analyze(&p));
    }

    #[test]
    fn test_empty_profile_gets_generic_classification() {
        let analysis = analyze(&Profile::default());
        assert_eq!(analysis.industry_focus, IndustryFocus::General);
        assert_eq!(analysis.role_type, RoleType::General);
        assert_eq!(analysis.career_trajectory, CareerTrajectory::Stable);
        assert_eq!(analysis.experience_depth, 1);
        assert!(analysis.soft_skills.is_empty());
    }

    #[test]
    fn test_industry_from_turkish_engineering_fields() {
        assert_eq!(
            classify_industry("", "endüstri mühendisliği"),
            IndustryFocus::IndustrialEngineering
        );
        assert_eq!(
            classify_industry("", "makine mühendisliği"),
            IndustryFocus::MechanicalEngineering
        );
        assert_eq!(
            classify_industry("", "elektrik-elektronik mühendisliği"),
            IndustryFocus::ElectricalEngineering
        );
        assert_eq!(
            classify_industry("", "bilgisayar mühendisliği"),
            IndustryFocus::Technology
        );
    }

    #[test]
    fn test_industrial_engineering_not_swallowed_by_technology() {
        // "industrial engineering" contains "engineer" — the engineering-field
        // rules must win over the technology keyword list.
        assert_eq!(
            classify_industry("", "industrial engineering"),
            IndustryFocus::IndustrialEngineering
        );
    }

    #[test]
    fn test_industry_title_checked_before_field() {
        // A developer with an industrial engineering degree is classified by
        // title first.
        assert_eq!(
            classify_industry("backend developer", "endüstri mühendisliği"),
            IndustryFocus::Technology
        );
    }

    #[test]
    fn test_industry_common_titles() {
        assert_eq!(classify_industry("ux designer", ""), IndustryFocus::Design);
        assert_eq!(
            classify_industry("product manager", ""),
            IndustryFocus::Management
        );
        assert_eq!(
            classify_industry("data analyst", ""),
            IndustryFocus::Analytics
        );
        assert_eq!(classify_industry("barista", ""), IndustryFocus::General);
    }

    #[test]
    fn test_role_management_outranks_senior() {
        assert_eq!(
            classify_role("senior engineering manager", ExperienceLevel::Senior, false),
            RoleType::Management
        );
    }

    #[test]
    fn test_role_senior_markers() {
        assert_eq!(
            classify_role("kıdemli yazılım geliştirici", ExperienceLevel::Mid, false),
            RoleType::SeniorIndividualContributor
        );
        assert_eq!(
            classify_role("principal engineer", ExperienceLevel::Unknown, false),
            RoleType::SeniorIndividualContributor
        );
    }

    #[test]
    fn test_role_junior_from_experience_level() {
        assert_eq!(
            classify_role("developer", ExperienceLevel::Junior, false),
            RoleType::Junior
        );
    }

    #[test]
    fn test_role_junior_engineer_override() {
        // Engineering field + junior experience → junior_engineer.
        assert_eq!(
            classify_role("", ExperienceLevel::Junior, true),
            RoleType::JuniorEngineer
        );
        let analysis = analyze(&profile("", "Endüstri Mühendisliği", "junior"));
        assert_eq!(analysis.role_type, RoleType::JuniorEngineer);
    }

    #[test]
    fn test_role_defaults() {
        assert_eq!(
            classify_role("developer", ExperienceLevel::Mid, false),
            RoleType::IndividualContributor
        );
        assert_eq!(
            classify_role("", ExperienceLevel::Unknown, false),
            RoleType::General
        );
    }

    #[test]
    fn test_skills_classified_into_exactly_one_category() {
        let skills = vec![
            "Python".to_string(),
            "React".to_string(),
            "Docker".to_string(),
            "Underwater Basket Weaving".to_string(),
        ];
        let result = categorize_skills(&skills, "");
        assert_eq!(result.programming_languages, vec!["Python"]);
        assert_eq!(result.frameworks, vec!["React"]);
        assert_eq!(result.tools, vec!["Docker"]);
    }

    #[test]
    fn test_skill_match_is_exact_not_substring() {
        // "javascript framework" is not an exact token — dropped.
        let result = categorize_skills(&["javascript framework".to_string()], "");
        assert!(result.programming_languages.is_empty());
        assert!(result.frameworks.is_empty());
    }

    #[test]
    fn test_engineering_baseline_tools_injected() {
        let result = categorize_skills(&[], "endüstri mühendisliği");
        assert_eq!(
            result.tools,
            INDUSTRIAL_BASELINE_TOOLS
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
        );

        let mech = categorize_skills(&[], "mechanical engineering");
        assert!(mech.tools.contains(&"SolidWorks".to_string()));
    }

    #[test]
    fn test_baseline_not_injected_when_tools_present() {
        let result = categorize_skills(&["Excel".to_string()], "endüstri mühendisliği");
        assert_eq!(result.tools, vec!["Excel"]);
    }

    #[test]
    fn test_soft_skills_from_personality_letters() {
        let tags = soft_skills_from_personality("ENTJ");
        assert!(tags.contains(&"communication".to_string())); // E
        assert!(tags.contains(&"strategic_thinking".to_string())); // N
        assert!(tags.contains(&"analytical_thinking".to_string())); // T
        assert!(tags.contains(&"planning".to_string())); // J
        assert!(!tags.contains(&"adaptability".to_string())); // no P
    }

    #[test]
    fn test_soft_skills_empty_without_assessment() {
        assert!(soft_skills_from_personality("").is_empty());
    }

    #[test]
    fn test_soft_skills_deterministic_order() {
        assert_eq!(
            soft_skills_from_personality("ISTJ"),
            soft_skills_from_personality("ISTJ")
        );
    }

    #[test]
    fn test_skill_gap_technical_leadership() {
        let technical = TechnicalSkills::default();
        let gaps = identify_skill_gaps(
            RoleType::SeniorIndividualContributor,
            IndustryFocus::General,
            &technical,
            &[],
        );
        assert_eq!(gaps, vec!["technical_leadership"]);
    }

    #[test]
    fn test_skill_gap_rules_are_ordered() {
        // Manager in technology with nothing at all trips all three rules in
        // their fixed order.
        let technical = TechnicalSkills::default();
        let gaps = identify_skill_gaps(
            RoleType::Management,
            IndustryFocus::Technology,
            &technical,
            &[],
        );
        assert_eq!(
            gaps,
            vec!["technical_leadership", "modern_frameworks", "leadership_skills"]
        );
    }

    #[test]
    fn test_leadership_soft_skill_suppresses_gap() {
        let technical = TechnicalSkills {
            programming_languages: vec!["Python".to_string()],
            ..TechnicalSkills::default()
        };
        let soft = vec!["leadership".to_string()];
        let gaps = identify_skill_gaps(
            RoleType::Management,
            IndustryFocus::General,
            &technical,
            &soft,
        );
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_trajectory_rules() {
        assert_eq!(
            classify_trajectory("", ExperienceLevel::Junior),
            CareerTrajectory::Growing
        );
        assert_eq!(
            classify_trajectory("", ExperienceLevel::Lead),
            CareerTrajectory::Expert
        );
        assert_eq!(
            classify_trajectory("product manager", ExperienceLevel::Mid),
            CareerTrajectory::ManagementTrack
        );
        assert_eq!(
            classify_trajectory("developer", ExperienceLevel::Mid),
            CareerTrajectory::Stable
        );
    }

    #[test]
    fn test_experience_depth_parses_years() {
        let experiences = vec![
            Experience {
                duration: Some("3 years".to_string()),
                ..Experience::default()
            },
            Experience {
                duration: Some("2 yıl".to_string()),
                ..Experience::default()
            },
        ];
        assert_eq!(experience_depth(&experiences), 5);
    }

    #[test]
    fn test_experience_depth_bounds() {
        assert_eq!(experience_depth(&[]), 1);

        let short = vec![Experience {
            duration: Some("2022-2023".to_string()),
            ..Experience::default()
        }];
        assert_eq!(experience_depth(&short), 1); // 0.5 floors to 0, clamped to 1

        let long: Vec<Experience> = (0..6)
            .map(|_| Experience {
                duration: Some("4 years".to_string()),
                ..Experience::default()
            })
            .collect();
        assert_eq!(experience_depth(&long), 10);
    }

    #[test]
    fn test_simulation_types_domain_overrides() {
        let industrial = simulation_types("endüstri mühendisliği", ExperienceLevel::Mid);
        assert!(industrial.contains(&"production_planning".to_string()));
        assert!(!industrial.contains(&"code_review".to_string()));

        let software = simulation_types("bilgisayar mühendisliği", ExperienceLevel::Mid);
        assert!(software.contains(&"code_review".to_string()));

        let mechanical = simulation_types("elektrik mühendisliği", ExperienceLevel::Mid);
        assert!(mechanical.contains(&"design_review".to_string()));

        let generic = simulation_types("işletme", ExperienceLevel::Mid);
        assert_eq!(
            generic,
            DEFAULT_SIMULATION_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_simulation_types_junior_prepends() {
        let types = simulation_types("bilgisayar mühendisliği", ExperienceLevel::Junior);
        assert_eq!(types[0], "onboarding_task");
        assert!(types.contains(&"code_review".to_string()));
    }

    #[test]
    fn test_simulation_types_senior_appends() {
        let types = simulation_types("bilgisayar mühendisliği", ExperienceLevel::Senior);
        assert_eq!(types.last().map(|s| s.as_str()), Some("team_leadership"));
        assert_eq!(types[0], "code_review");
    }

    #[test]
    fn test_analysis_with_personality_flows_into_soft_skills() {
        let p = Profile {
            personality_assessment: Some(PersonalityAssessment {
                personality_type: Some("INFP".to_string()),
                ..PersonalityAssessment::default()
            }),
            ..Profile::default()
        };
        let analysis = analyze(&p);
        assert!(analysis.soft_skills.contains(&"empathy".to_string()));
        assert!(analysis.soft_skills.contains(&"adaptability".to_string()));
    }
}
