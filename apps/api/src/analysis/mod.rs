// Profile analysis engine: classification, personalization, recommendations.
// Everything in this module is a pure function of its input — no I/O, no
// shared state. The same profile always yields the same analysis.

pub mod analyzer;
pub mod personalization;
pub mod recommendations;
