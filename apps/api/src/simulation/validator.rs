//! Domain-Consistency Validator — cross-checks a generated scenario's subject
//! matter against the user's declared field of study.
//!
//! Deliberately a bounded keyword heuristic over three mutually exclusive
//! domain pairs, not semantic validation. Anything outside the three pairs is
//! accepted as-is: false negatives are tolerated, false positives are not.

use crate::analysis::analyzer::fold_lower;
use crate::models::profile::Profile;
use crate::models::scenario::GeneratedScenario;

/// A detected contradiction between field of study and scenario content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMismatch {
    pub reason: String,
}

struct ExclusionRule {
    /// Keywords identifying the profile's field of study (lowercased match).
    field_keywords: &'static [&'static str],
    /// Terms that must not appear in the scenario's title/category/context.
    forbidden_terms: &'static [&'static str],
    label: &'static str,
}

const EXCLUSION_RULES: &[ExclusionRule] = &[
    // Industrial engineers must not be handed software-development days.
    ExclusionRule {
        field_keywords: &["endüstri", "industrial"],
        forbidden_terms: &[
            "developer",
            "backend",
            "frontend",
            "code",
            "react",
            "api",
            "yazılım geliştirme",
            "mikroservis",
            "deploy",
        ],
        label: "industrial engineering vs software development",
    },
    // Software people must not be dropped onto a factory floor.
    ExclusionRule {
        field_keywords: &["bilgisayar", "computer", "yazılım", "software"],
        forbidden_terms: &[
            "production",
            "factory",
            "quality control",
            "lean",
            "üretim",
            "fabrika",
            "kalite kontrol",
            "vardiya",
        ],
        label: "computer/software vs production",
    },
    // Mechanical engineers must not get software-development scenarios.
    ExclusionRule {
        field_keywords: &["makine", "mechanical"],
        forbidden_terms: &[
            "developer",
            "backend",
            "frontend",
            "code",
            "react",
            "api",
            "yazılım geliştirme",
        ],
        label: "mechanical engineering vs software development",
    },
];

/// Validates the scenario's declared domain signals against the profile's
/// field of study. `Ok(())` means "no contradiction detected", not "verified
/// correct".
pub fn validate(
    scenario: &GeneratedScenario,
    profile: &Profile,
) -> Result<(), DomainMismatch> {
    let field = fold_lower(profile.field_of_study());
    if field.trim().is_empty() {
        return Ok(());
    }

    let scenario_text = fold_lower(&format!(
        "{} {} {}",
        scenario.title, scenario.category, scenario.context
    ));

    for rule in EXCLUSION_RULES {
        if !rule.field_keywords.iter().any(|k| field.contains(k)) {
            continue;
        }
        if let Some(term) = rule
            .forbidden_terms
            .iter()
            .find(|t| scenario_text.contains(*t))
        {
            return Err(DomainMismatch {
                reason: format!(
                    "{}: scenario mentions \"{}\" which contradicts the declared field",
                    rule.label, term
                ),
            });
        }
    }

    Ok(())
}
