use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::feedback::models::Feedback;
use crate::feedback::repositories::FeedbackRepository;
use verity_common::error::{VerityError, VerityResult};

#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_feedback_row(row: &PgRow) -> Feedback {
    Feedback {
        id: row.get("id"),
        author_id: row.get("author_id"),
        claim_id: row.get("claim_id"),
        liked: row.get("liked"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn upsert(&self, feedback: Feedback) -> VerityResult<Feedback> {
        let row = sqlx::query(
            "insert into feedback (id, author_id, claim_id, liked, created_at)
             values ($1, $2, $3, $4, $5)
             on conflict (author_id, claim_id) do update set liked = excluded.liked
             returning id, author_id, claim_id, liked, created_at",
        )
        .bind(feedback.id)
        .bind(feedback.author_id)
        .bind(feedback.claim_id)
        .bind(feedback.liked)
        .bind(feedback.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok(map_feedback_row(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Feedback>> {
        let row = sqlx::query(
            "select id, author_id, claim_id, liked, created_at from feedback where id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok(row.as_ref().map(map_feedback_row))
    }

    async fn count_by_claim(&self, claim_id: Uuid) -> VerityResult<(i64, i64)> {
        let row = sqlx::query(
            "select count(*) filter (where liked) as likes,
                    count(*) filter (where not liked) as dislikes
             from feedback
             where claim_id = $1",
        )
        .bind(claim_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok((row.get("likes"), row.get("dislikes")))
    }

    async fn list_by_claim(&self, claim_id: Uuid) -> VerityResult<Vec<Feedback>> {
        let rows = sqlx::query(
            "select id, author_id, claim_id, liked, created_at
             from feedback
             where claim_id = $1
             order by created_at desc",
        )
        .bind(claim_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok(rows.iter().map(map_feedback_row).collect())
    }

    async fn list_by_author(&self, author_id: Uuid) -> VerityResult<Vec<Feedback>> {
        let rows = sqlx::query(
            "select id, author_id, claim_id, liked, created_at
             from feedback
             where author_id = $1
             order by created_at desc",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok(rows.iter().map(map_feedback_row).collect())
    }

    async fn delete(&self, id: Uuid) -> VerityResult<bool> {
        let result = sqlx::query("delete from feedback where id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_claim(&self, claim_id: Uuid) -> VerityResult<u64> {
        let result = sqlx::query("delete from feedback where claim_id = $1")
            .bind(claim_id)
            .execute(&self.pool)
            .await
            .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
