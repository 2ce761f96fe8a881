/// LLM Client — the single point of entry for all generative-provider calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All generative interactions MUST go through this module.
///
/// The pipeline is single-shot by design: one request, one candidate, no
/// retry loop. A timeout or non-success status is a generation failure and
/// the caller degrades to the fallback bank.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// Request timeout for the generative provider. A timeout is treated
/// identically to a non-success status upstream.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned no text candidate")]
    EmptyContent,
}

/// Generation controls sent alongside every request.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Full-day scenario generation: some variety, long output.
    pub const SCENARIO: GenerationConfig = GenerationConfig {
        temperature: 0.4,
        max_output_tokens: 3000,
    };

    /// CV parsing: near-deterministic, short output.
    pub const CV_PARSE: GenerationConfig = GenerationConfig {
        temperature: 0.1,
        max_output_tokens: 1000,
    };
}

// ────────────────────────────────────────────────────────────────────────────
// Wire shapes (Gemini generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiResponse {
    /// Text of the first non-empty candidate part, if any.
    fn text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .find(|t| !t.is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Provider trait + Gemini implementation
// ────────────────────────────────────────────────────────────────────────────

/// The generative-provider seam. The pipeline only sees this trait, so tests
/// inject mock providers and the HTTP provider can be swapped without
/// touching any pipeline code.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<String, LlmError>;
}

/// The single Gemini client used by all services.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<String, LlmError> {
        let request_body = GeminiRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: config,
        };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        let text = parsed.text().ok_or(LlmError::EmptyContent)?;

        debug!("provider call succeeded: {} chars returned", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_gemini_field_names() {
        let body = GeminiRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "merhaba" }],
            }],
            generation_config: GenerationConfig::SCENARIO,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "merhaba");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 3000);
        assert!((value["generationConfig"]["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_takes_first_candidate() {
        let json = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "birinci"}]}},
                {"content": {"parts": [{"text": "ikinci"}]}}
            ]
        });
        let response: GeminiResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("birinci"));
    }

    #[test]
    fn test_response_without_candidates_yields_none() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_response_with_empty_part_yields_none() {
        let json = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": ""}]}}]
        });
        let response: GeminiResponse = serde_json::from_value(json).unwrap();
        assert!(response.text().is_none());
    }
}
