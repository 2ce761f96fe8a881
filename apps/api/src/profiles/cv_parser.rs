//! CV Parser — extracts a structured profile draft from raw CV text.
//!
//! One near-deterministic generation call; the response goes through the same
//! extraction machinery as the scenario pipeline. Unlike scenario synthesis
//! there is no fallback bank here — a CV that cannot be parsed is an error
//! the caller must see.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{GenerationConfig, TextGenerator};
use crate::simulation::extractor::extract;

/// System-style preamble + schema for CV analysis.
/// Replace `{cv_text}` before sending.
const CV_PARSE_PROMPT_TEMPLATE: &str = r#"Lütfen aşağıdaki CV metnini dikkatlice analiz et ve aşağıdaki JSON yapısına uygun şekilde, sadece JSON olarak yanıt ver; her alanı doldur, eksik bırakma:

{
  "firstName": "ad",
  "lastName": "soyad",
  "email": "email@domain.com",
  "phone": "telefon",
  "location": "şehir, ülke",
  "currentTitle": "mevcut pozisyon",
  "summary": "kısa özet",
  "experienceLevel": "junior | mid | senior | lead",
  "skills": ["beceri1", "beceri2"],
  "experiences": [{"company": "şirket", "position": "pozisyon", "duration": "2022-2024", "description": "açıklama"}],
  "education": {
    "university": "üniversite",
    "degree": "bölüm",
    "graduationYear": "2022",
    "gpa": "3.5/4.0"
  }
}

CV Metni:
{cv_text}"#;

/// The profile draft extracted from a CV — camelCase on the wire, matching
/// what the frontend feeds back into `save-profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvAnalysis {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub current_title: Option<String>,
    pub summary: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Vec<String>,
    pub experiences: Vec<CvExperience>,
    pub education: Option<CvEducation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvEducation {
    pub university: Option<String>,
    pub degree: Option<String>,
    pub graduation_year: Option<String>,
    pub gpa: Option<String>,
}

/// Parses CV text into a structured profile draft.
pub async fn parse_cv(
    cv_text: &str,
    generator: &dyn TextGenerator,
) -> Result<CvAnalysis, AppError> {
    let prompt = CV_PARSE_PROMPT_TEMPLATE.replace("{cv_text}", cv_text);

    let raw = generator
        .generate(&prompt, GenerationConfig::CV_PARSE)
        .await
        .map_err(|e| AppError::Provider(format!("CV analysis call failed: {e}")))?;

    let payload = extract(&raw)
        .map_err(|e| AppError::Provider(format!("CV response not parseable: {e}")))?;

    serde_json::from_value(payload)
        .map_err(|e| AppError::Provider(format!("CV payload shape invalid: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct FixedGenerator(String);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _config: GenerationConfig,
        ) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_prompt_embeds_cv_text() {
        let prompt = CV_PARSE_PROMPT_TEMPLATE.replace("{cv_text}", "Ali Veli, Endüstri Mühendisi");
        assert!(prompt.contains("Ali Veli, Endüstri Mühendisi"));
        assert!(prompt.contains("\"experienceLevel\""));
    }

    #[test]
    fn test_cv_analysis_deserializes_camel_case() {
        let json = serde_json::json!({
            "firstName": "Ayşe",
            "currentTitle": "Backend Developer",
            "experienceLevel": "mid",
            "skills": ["Python"],
            "education": {"university": "İTÜ", "degree": "Bilgisayar Mühendisliği", "graduationYear": "2020"}
        });
        let analysis: CvAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(analysis.first_name.as_deref(), Some("Ayşe"));
        assert_eq!(
            analysis.education.unwrap().graduation_year.as_deref(),
            Some("2020")
        );
    }

    #[tokio::test]
    async fn test_parse_cv_handles_fenced_response() {
        let response = "```json\n{\"firstName\": \"Ali\", \"skills\": [\"Excel\"]}\n```";
        let analysis = parse_cv("cv metni", &FixedGenerator(response.to_string()))
            .await
            .unwrap();
        assert_eq!(analysis.first_name.as_deref(), Some("Ali"));
        assert_eq!(analysis.skills, vec!["Excel"]);
    }

    #[tokio::test]
    async fn test_parse_cv_surfaces_unparseable_response_as_error() {
        let result = parse_cv("cv metni", &FixedGenerator("yanıt veremem".to_string())).await;
        assert!(result.is_err(), "no fallback bank for CV parsing");
    }
}
