use async_trait::async_trait;
use uuid::Uuid;

use crate::claims::models::Claim;
use verity_common::error::VerityResult;

#[async_trait]
pub trait ClaimRepository: Send + Sync {
    /// Lookup key for idempotent verification: identical text by the same author.
    async fn find_by_content_and_author(
        &self,
        content: &str,
        author_id: Uuid,
    ) -> VerityResult<Option<Claim>>;

    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Claim>>;

    /// Insert a new claim. Returns the stored row; an existing row for the
    /// same (content, author) is returned unchanged instead of duplicated.
    async fn save(&self, claim: Claim) -> VerityResult<Claim>;

    /// Returns `false` when no row matched.
    async fn delete(&self, id: Uuid) -> VerityResult<bool>;
}
