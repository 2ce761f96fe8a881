//! Simulated-workday scenario — the payload contract with the generative provider.
//!
//! Deserialization is deliberately strict: every field is required, so a
//! provider response missing any of them fails to parse and the pipeline
//! substitutes a fallback scenario instead of returning a partial object.

use serde::{Deserialize, Serialize};

/// A complete simulated workday returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedScenario {
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub context: String,
    pub daily_schedule: Vec<ScheduleEntry>,
    pub emails: Vec<ScenarioEmail>,
    pub meetings: Vec<ScenarioMeeting>,
    pub situation: String,
    pub question: String,
    pub options: Vec<DecisionOption>,
}

impl GeneratedScenario {
    /// A scenario is only returnable when its decision point is usable.
    /// Field presence is already enforced by deserialization; this guards the
    /// one invariant serde cannot express (`options` non-empty).
    pub fn is_schema_complete(&self) -> bool {
        !self.options.is_empty()
    }
}

/// One task block in the daily schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub task: String,
    /// "Kritik" | "Yüksek" | "Orta" | "Düşük"
    pub priority: String,
    pub department: String,
    pub team_size: u32,
    pub tools: Vec<String>,
    pub duration_min: u32,
}

/// An email the user receives (or must send) during the simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEmail {
    #[serde(rename = "from")]
    pub sender: String,
    pub subject: String,
    pub summary: String,
}

/// A meeting on the simulated day's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMeeting {
    pub time: String,
    pub participants: Vec<String>,
    pub topic: String,
    pub summary: String,
}

/// One answer option at the scenario's decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: String,
    pub text: String,
    pub feedback: String,
    /// 0–5; some provider responses omit it, so it stays optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}
