// Scenario synthesis pipeline: prompt build → generate → extract → validate,
// with a deterministic fallback bank as the safety net.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod extractor;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod validator;
