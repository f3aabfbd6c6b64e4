use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Feedback reaction category. Persisted and transmitted as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Reaction {
    Great,
    Ok,
    Bad,
}

impl Reaction {
    pub fn code(self) -> u8 {
        match self {
            Reaction::Great => 1,
            Reaction::Ok => 2,
            Reaction::Bad => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Reaction::Great => "Great",
            Reaction::Ok => "OK",
            Reaction::Bad => "Bad",
        }
    }

    pub const ALL: [Reaction; 3] = [Reaction::Great, Reaction::Ok, Reaction::Bad];

    /// Coerce a raw JSON value into a reaction. Accepts the integers 1..=3 and
    /// strings that parse to exactly one of them; everything else is rejected.
    pub fn coerce(value: &JsonValue) -> Option<Reaction> {
        let code = match value {
            JsonValue::Number(n) => n.as_i64()?,
            JsonValue::String(s) => s.trim().parse::<i64>().ok()?,
            _ => return None,
        };
        u8::try_from(code).ok().and_then(|c| Reaction::try_from(c).ok())
    }
}

impl From<Reaction> for u8 {
    fn from(r: Reaction) -> u8 {
        r.code()
    }
}

impl TryFrom<u8> for Reaction {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Reaction::Great),
            2 => Ok(Reaction::Ok),
            3 => Ok(Reaction::Bad),
            other => Err(format!("invalid reaction code: {}", other)),
        }
    }
}

/// A single submitted feedback response, the only persisted entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Position-derived id (`len + 1` at append time). Restarts from 1 after a
    /// clear, so it is a hint for humans, not a stable primary key.
    pub id: u64,
    /// Caller-supplied timestamp, stored verbatim.
    pub timestamp: String,
    pub reaction: Reaction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Server-assigned RFC 3339 UTC instant.
    pub created_at: String,
}
