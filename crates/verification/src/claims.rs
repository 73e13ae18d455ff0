use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use verity_common::error::{VerityError, VerityResult};
use verity_db::authors::repositories::AuthorRepository;
use verity_db::claims::models::{Claim, Verdict};
use verity_db::claims::repositories::ClaimRepository;
use verity_db::feedback::models::FeedbackStats;
use verity_db::feedback::repositories::FeedbackRepository;

use crate::confidence::blend_confidence;
use crate::orchestrator::ClaimVerifier;

/// A stored claim as shown to readers: the immutable adjudication fields
/// plus feedback and display confidence computed at read time.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimView {
    pub id: Uuid,
    pub content: String,
    pub verdict: Verdict,
    pub raw_confidence: i32,
    pub confidence: i32,
    pub summary: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub feedback: FeedbackStats,
}

impl ClaimView {
    pub fn new(claim: Claim, feedback: FeedbackStats) -> Self {
        Self {
            id: claim.id,
            confidence: blend_confidence(claim.confidence, feedback.like_percent),
            raw_confidence: claim.confidence,
            content: claim.content,
            verdict: claim.verdict,
            summary: claim.summary,
            author_id: claim.author_id,
            created_at: claim.created_at,
            feedback,
        }
    }
}

pub struct ClaimService<C, Fb, Au, V>
where
    C: ClaimRepository,
    Fb: FeedbackRepository,
    Au: AuthorRepository,
    V: ClaimVerifier,
{
    claims: C,
    feedback: Fb,
    authors: Au,
    verifier: V,
}

impl<C, Fb, Au, V> ClaimService<C, Fb, Au, V>
where
    C: ClaimRepository,
    Fb: FeedbackRepository,
    Au: AuthorRepository,
    V: ClaimVerifier,
{
    pub fn new(claims: C, feedback: Fb, authors: Au, verifier: V) -> Self {
        Self {
            claims,
            feedback,
            authors,
            verifier,
        }
    }

    /// Verify `content` for `author_id`, or return the claim already stored
    /// for that pair. A stored claim is never re-verified.
    pub async fn process_claim(&self, content: &str, author_id: Uuid) -> VerityResult<ClaimView> {
        if content.trim().is_empty() {
            return Err(VerityError::Validation(
                "claim content must not be empty".to_string(),
            ));
        }

        self.authors
            .get_by_id(author_id)
            .await?
            .ok_or_else(|| VerityError::NotFound(format!("author {author_id}")))?;

        if let Some(existing) = self
            .claims
            .find_by_content_and_author(content, author_id)
            .await?
        {
            tracing::info!(claim_id = %existing.id, "claim already verified for author");
            return self.view(existing).await;
        }

        let result = self.verifier.verify(content).await;

        let claim = Claim {
            id: Uuid::new_v4(),
            content: content.to_string(),
            verdict: result.verdict,
            confidence: result.confidence.clamp(0, 100),
            summary: result.summary,
            author_id,
            created_at: Utc::now(),
        };
        let saved = self.claims.save(claim).await?;

        tracing::info!(
            claim_id = %saved.id,
            %author_id,
            verdict = %saved.verdict,
            confidence = saved.confidence,
            "claim stored"
        );

        self.view(saved).await
    }

    pub async fn get_claim(&self, id: Uuid) -> VerityResult<ClaimView> {
        let claim = self.require_claim(id).await?;
        self.view(claim).await
    }

    /// Display confidence for a claim, blended with its current feedback.
    pub async fn claim_confidence(&self, id: Uuid) -> VerityResult<i32> {
        let claim = self.require_claim(id).await?;
        let stats = self.stats(claim.id).await?;
        Ok(blend_confidence(claim.confidence, stats.like_percent))
    }

    /// Remove a claim and every reaction to it.
    pub async fn delete_claim(&self, id: Uuid) -> VerityResult<()> {
        self.require_claim(id).await?;

        let removed = self.feedback.delete_by_claim(id).await?;
        if !self.claims.delete(id).await? {
            return Err(VerityError::NotFound(format!("claim {id}")));
        }

        tracing::info!(claim_id = %id, feedback_removed = removed, "claim deleted");
        Ok(())
    }

    async fn require_claim(&self, id: Uuid) -> VerityResult<Claim> {
        self.claims
            .get_by_id(id)
            .await?
            .ok_or_else(|| VerityError::NotFound(format!("claim {id}")))
    }

    async fn stats(&self, claim_id: Uuid) -> VerityResult<FeedbackStats> {
        let (likes, dislikes) = self.feedback.count_by_claim(claim_id).await?;
        Ok(FeedbackStats::from_counts(claim_id, likes, dislikes))
    }

    async fn view(&self, claim: Claim) -> VerityResult<ClaimView> {
        let stats = self.stats(claim.id).await?;
        Ok(ClaimView::new(claim, stats))
    }
}
