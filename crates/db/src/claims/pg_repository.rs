use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::claims::models::{Claim, Verdict};
use crate::claims::repositories::ClaimRepository;
use verity_common::error::{VerityError, VerityResult};

#[derive(Clone)]
pub struct PgClaimRepository {
    pool: PgPool,
}

impl PgClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_claim_row(row: PgRow) -> VerityResult<Claim> {
        let verdict_raw: String = row.get("verdict");
        let verdict = Verdict::from_str(&verdict_raw).map_err(VerityError::Internal)?;

        Ok(Claim {
            id: row.get("id"),
            content: row.get("content"),
            verdict,
            confidence: row.get("confidence"),
            summary: row.get("summary"),
            author_id: row.get("author_id"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl ClaimRepository for PgClaimRepository {
    async fn find_by_content_and_author(
        &self,
        content: &str,
        author_id: Uuid,
    ) -> VerityResult<Option<Claim>> {
        let row = sqlx::query(
            "select id, content, verdict, confidence, summary, author_id, created_at
             from claims
             where md5(content) = md5($1) and author_id = $2 and content = $1",
        )
        .bind(content)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))?;

        row.map(Self::map_claim_row).transpose()
    }

    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Claim>> {
        let row = sqlx::query(
            "select id, content, verdict, confidence, summary, author_id, created_at
             from claims
             where id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))?;

        row.map(Self::map_claim_row).transpose()
    }

    async fn save(&self, claim: Claim) -> VerityResult<Claim> {
        // A concurrent submission of the same pair may have landed first; the
        // unique (md5(content), author_id) index turns that into a no-op and
        // the existing row wins.
        let inserted = sqlx::query(
            "insert into claims (id, content, verdict, confidence, summary, author_id, created_at)
             values ($1, $2, $3, $4, $5, $6, $7)
             on conflict ((md5(content)), author_id) do nothing
             returning id, content, verdict, confidence, summary, author_id, created_at",
        )
        .bind(claim.id)
        .bind(&claim.content)
        .bind(claim.verdict.as_str())
        .bind(claim.confidence)
        .bind(&claim.summary)
        .bind(claim.author_id)
        .bind(claim.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))?;

        match inserted {
            Some(row) => Self::map_claim_row(row),
            None => self
                .find_by_content_and_author(&claim.content, claim.author_id)
                .await?
                .ok_or_else(|| {
                    VerityError::Internal("claim insert conflicted but no row exists".to_string())
                }),
        }
    }

    async fn delete(&self, id: Uuid) -> VerityResult<bool> {
        let result = sqlx::query("delete from claims where id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| VerityError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
