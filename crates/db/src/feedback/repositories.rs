use async_trait::async_trait;
use uuid::Uuid;

use crate::feedback::models::Feedback;
use verity_common::error::VerityResult;

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Insert a reaction, or replace `liked` on the author's existing one.
    async fn upsert(&self, feedback: Feedback) -> VerityResult<Feedback>;

    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Feedback>>;

    /// Returns `(likes, dislikes)` for a claim.
    async fn count_by_claim(&self, claim_id: Uuid) -> VerityResult<(i64, i64)>;

    async fn list_by_claim(&self, claim_id: Uuid) -> VerityResult<Vec<Feedback>>;
    async fn list_by_author(&self, author_id: Uuid) -> VerityResult<Vec<Feedback>>;

    /// Returns `false` when no row matched.
    async fn delete(&self, id: Uuid) -> VerityResult<bool>;

    /// Returns the number of rows removed.
    async fn delete_by_claim(&self, claim_id: Uuid) -> VerityResult<u64>;
}
