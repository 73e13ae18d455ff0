use serde::{Deserialize, Serialize};
use verity_db::claims::models::Verdict;

pub const DEFAULT_SUMMARY: &str = "adjudication unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjudicationOutcome {
    pub verdict: Verdict,
    /// 0..=100
    pub confidence: i32,
    pub summary: String,
}

impl Default for AdjudicationOutcome {
    fn default() -> Self {
        Self {
            verdict: Verdict::Pending,
            confidence: 0,
            summary: DEFAULT_SUMMARY.to_string(),
        }
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}
