use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One author's reaction to one claim. At most one row per (author, claim).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub author_id: Uuid,
    pub claim_id: Uuid,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Community reaction aggregate for a claim, read fresh on every use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackStats {
    pub claim_id: Uuid,
    pub total_likes: i64,
    pub total_dislikes: i64,
    /// Share of likes in 0..=100; 0 when nobody has reacted.
    pub like_percent: f64,
}

impl FeedbackStats {
    pub fn from_counts(claim_id: Uuid, likes: i64, dislikes: i64) -> Self {
        let likes = likes.max(0);
        let dislikes = dislikes.max(0);
        let total = likes + dislikes;
        let like_percent = if total == 0 {
            0.0
        } else {
            likes as f64 * 100.0 / total as f64
        };

        Self {
            claim_id,
            total_likes: likes,
            total_dislikes: dislikes,
            like_percent,
        }
    }
}
