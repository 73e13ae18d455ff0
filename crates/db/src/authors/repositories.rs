use async_trait::async_trait;
use uuid::Uuid;

use crate::authors::models::Author;
use verity_common::error::VerityResult;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Author>>;
}
