use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::authors::models::Author;
use crate::authors::repositories::AuthorRepository;
use verity_common::error::{VerityError, VerityResult};

#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: PgPool,
}

impl PgAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Author>> {
        let row = sqlx::query("select id, name, email, created_at from authors where id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok(row.map(|r| Author {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            created_at: r.get("created_at"),
        }))
    }
}
