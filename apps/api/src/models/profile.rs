//! Profile record — the user's self-reported career/education/skills data.
//!
//! The wire shape matches the Supabase `profiles` table (snake_case columns).
//! Every field is optional or defaulted: the analyzer must never be able to
//! trust presence, so a sparse `{}` body deserializes into a valid Profile.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user profile as stored in (and fetched from) the profile store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub current_title: Option<String>,
    /// Free text on the wire ("junior" | "mid" | "senior" | "lead" expected).
    /// Parsed into a closed enum by the analyzer; unknown values tolerated.
    pub experience_level: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub university: Option<String>,
    /// The field of study ("Endüstri Mühendisliği", "Bilgisayar Mühendisliği", …).
    pub degree: Option<String>,
    pub graduation_year: Option<String>,
    pub gpa: Option<String>,
    pub personality_assessment: Option<PersonalityAssessment>,
}

impl Profile {
    /// Title as shown to the generative provider; empty string when absent.
    pub fn title_text(&self) -> &str {
        self.current_title.as_deref().unwrap_or("")
    }

    /// Field of study; empty string when absent.
    pub fn field_of_study(&self) -> &str {
        self.degree.as_deref().unwrap_or("")
    }
}

/// A single work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

/// Optional MBTI-style personality assessment attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityAssessment {
    /// Four-letter type code, e.g. "ENTJ". Drives soft-skill derivation.
    pub personality_type: Option<String>,
    pub learning_style: Option<String>,
    pub work_style: Option<String>,
    pub communication_preference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_default_profile() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
        assert!(profile.skills.is_empty());
        assert!(profile.current_title.is_none());
    }

    #[test]
    fn test_full_profile_round_trips() {
        let json = serde_json::json!({
            "current_title": "Backend Developer",
            "experience_level": "senior",
            "skills": ["Python", "Django"],
            "experiences": [
                {"company": "Acme", "position": "Developer", "duration": "3 years", "description": "API work"}
            ],
            "university": "ODTÜ",
            "degree": "Bilgisayar Mühendisliği",
            "personality_assessment": {"personality_type": "INTJ"}
        });
        let profile: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.title_text(), "Backend Developer");
        assert_eq!(profile.field_of_study(), "Bilgisayar Mühendisliği");
        assert_eq!(profile.experiences.len(), 1);
        assert_eq!(
            profile.personality_assessment.unwrap().personality_type,
            Some("INTJ".to_string())
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // Supabase rows carry columns this core does not consume (created_at etc.)
        let json = serde_json::json!({
            "current_title": "Designer",
            "created_at": "2024-01-01T00:00:00Z",
            "avatar_url": "https://example.com/a.png"
        });
        let profile: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.title_text(), "Designer");
    }

    #[test]
    fn test_id_omitted_from_serialization_when_absent() {
        let profile = Profile::default();
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("id").is_none(), "absent id must not serialize as null");
    }
}
