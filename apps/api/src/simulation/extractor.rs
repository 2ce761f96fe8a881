//! Response Extractor — pulls a JSON payload out of unstructured provider text.
//!
//! Providers wrap payloads in prose or code fences despite the JSON-only
//! instruction, and long responses get truncated. Extraction is best-effort
//! text scanning, isolated here so a stricter structured-output mode could
//! replace it without touching the rest of the pipeline.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("response contained no JSON payload")]
    NoPayload,

    #[error("payload span is not valid JSON: {0}")]
    Malformed(String),
}

impl ExtractionError {
    /// Stable machine-readable reason, reported in fallback responses.
    pub fn reason(&self) -> &'static str {
        match self {
            ExtractionError::NoPayload => "no_payload",
            ExtractionError::Malformed(_) => "malformed",
        }
    }
}

/// Extracts and parses the JSON payload from raw provider output.
///
/// Order: a fenced block explicitly marked as JSON wins; otherwise the greedy
/// span from the first `{` to the last `}`. Never panics — callers always get
/// a payload or a typed error.
pub fn extract(raw: &str) -> Result<Value, ExtractionError> {
    if let Some(interior) = fenced_json_block(raw) {
        return parse_span(interior);
    }

    let start = match raw.find('{') {
        Some(index) => index,
        None => return Err(ExtractionError::NoPayload),
    };
    let end = match raw.rfind('}') {
        Some(index) if index >= start => index,
        _ => return Err(ExtractionError::NoPayload),
    };

    parse_span(&raw[start..=end])
}

fn parse_span(span: &str) -> Result<Value, ExtractionError> {
    serde_json::from_str(span.trim()).map_err(|e| ExtractionError::Malformed(e.to_string()))
}

/// Interior of the first ```json … ``` block, if present.
fn fenced_json_block(raw: &str) -> Option<&str> {
    let open = raw.find("```json")?;
    let rest = &raw[open + "```json".len()..];
    let close = rest.find("```")?;
    Some(&rest[..close])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_payload_returned_unchanged() {
        let raw = r#"{"title": "Gün", "score": 5}"#;
        let value = extract(raw).unwrap();
        assert_eq!(value["title"], "Gün");
        assert_eq!(value["score"], 5);
    }

    #[test]
    fn test_fenced_payload_extracted() {
        let raw = "İşte senaryonuz:\n```json\n{\"title\": \"Gün\"}\n```\nİyi çalışmalar!";
        let value = extract(raw).unwrap();
        assert_eq!(value["title"], "Gün");
    }

    #[test]
    fn test_prose_wrapped_payload_extracted_by_brace_span() {
        let raw = "Elbette, istediğiniz JSON: {\"title\": \"Gün\"} — başka bir şey lazım mı?";
        let value = extract(raw).unwrap();
        assert_eq!(value["title"], "Gün");
    }

    #[test]
    fn test_no_braces_is_no_payload() {
        assert_eq!(extract("Üzgünüm, yardımcı olamam."), Err(ExtractionError::NoPayload));
        assert_eq!(extract(""), Err(ExtractionError::NoPayload));
    }

    #[test]
    fn test_reversed_braces_is_no_payload() {
        // '}' before '{' — no valid span exists.
        assert_eq!(extract("} oops {"), Err(ExtractionError::NoPayload));
    }

    #[test]
    fn test_unbalanced_braces_is_malformed() {
        let result = extract("{\"title\": \"Gün\"}}");
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn test_truncated_payload_is_malformed() {
        // Truncation mid-array: both braces present, span does not parse.
        let result = extract("{\"daily_schedule\": [{\"time\": \"09:00\"}");
        // No closing outer brace at the end: last '}' is the entry's.
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn test_greedy_span_spans_nested_objects() {
        let raw = "önce {\"a\": {\"b\": 1}, \"c\": [2, 3]} sonra";
        let value = extract(raw).unwrap();
        assert_eq!(value["a"]["b"], 1);
    }

    #[test]
    fn test_fenced_block_with_garbage_is_malformed_not_retried() {
        // A marked fence wins even when its interior is broken.
        let raw = "```json\nnot json\n``` {\"valid\": true}";
        assert!(matches!(extract(raw), Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(ExtractionError::NoPayload.reason(), "no_payload");
        assert_eq!(
            ExtractionError::Malformed("x".to_string()).reason(),
            "malformed"
        );
    }
}
