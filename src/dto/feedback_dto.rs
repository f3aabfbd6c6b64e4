use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Body of `POST /api/response`. The reaction arrives as raw JSON because
/// kiosks send it either as a number or a numeric string; coercion happens in
/// the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponseRequest {
    #[serde(default)]
    pub reaction: Option<JsonValue>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCount {
    pub reaction: u8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsData {
    pub total: usize,
    /// Per-category counts in fixed order 1 (Great), 2 (OK), 3 (Bad).
    pub reactions: Vec<ReactionCount>,
    /// Per-day submission counts, most recent first, at most 30 days.
    pub daily: Vec<DailyCount>,
}
