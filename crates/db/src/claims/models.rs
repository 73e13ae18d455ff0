use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Adjudication outcome attached to a claim. Wire tokens are case-sensitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    True,
    False,
    PartiallyTrue,
    Unverifiable,
    Pending,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::PartiallyTrue => "PARTIALLY_TRUE",
            Self::Unverifiable => "UNVERIFIABLE",
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "TRUE" => Ok(Self::True),
            "FALSE" => Ok(Self::False),
            "PARTIALLY_TRUE" => Ok(Self::PartiallyTrue),
            "UNVERIFIABLE" => Ok(Self::Unverifiable),
            "PENDING" => Ok(Self::Pending),
            _ => Err(format!("unknown verdict: {value}")),
        }
    }
}

/// A verified claim. Verdict, confidence and summary never change after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub id: Uuid,
    pub content: String,
    pub verdict: Verdict,
    /// Raw adjudication confidence, 0..=100.
    pub confidence: i32,
    pub summary: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}
