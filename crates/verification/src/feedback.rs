use chrono::Utc;
use uuid::Uuid;

use verity_common::error::{VerityError, VerityResult};
use verity_db::authors::repositories::AuthorRepository;
use verity_db::claims::repositories::ClaimRepository;
use verity_db::feedback::models::{Feedback, FeedbackStats};
use verity_db::feedback::repositories::FeedbackRepository;

/// Records community reactions to claims and serves their aggregates.
pub struct FeedbackService<Fb, C, Au>
where
    Fb: FeedbackRepository,
    C: ClaimRepository,
    Au: AuthorRepository,
{
    feedback: Fb,
    claims: C,
    authors: Au,
}

impl<Fb, C, Au> FeedbackService<Fb, C, Au>
where
    Fb: FeedbackRepository,
    C: ClaimRepository,
    Au: AuthorRepository,
{
    pub fn new(feedback: Fb, claims: C, authors: Au) -> Self {
        Self {
            feedback,
            claims,
            authors,
        }
    }

    /// Add the author's reaction to a claim, replacing any earlier one.
    pub async fn submit(
        &self,
        author_id: Uuid,
        claim_id: Uuid,
        liked: bool,
    ) -> VerityResult<Feedback> {
        self.require_author(author_id).await?;
        self.require_claim(claim_id).await?;

        let saved = self
            .feedback
            .upsert(Feedback {
                id: Uuid::new_v4(),
                author_id,
                claim_id,
                liked,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(feedback_id = %saved.id, %claim_id, liked, "feedback recorded");
        Ok(saved)
    }

    pub async fn stats(&self, claim_id: Uuid) -> VerityResult<FeedbackStats> {
        self.require_claim(claim_id).await?;
        let (likes, dislikes) = self.feedback.count_by_claim(claim_id).await?;
        Ok(FeedbackStats::from_counts(claim_id, likes, dislikes))
    }

    pub async fn by_author(&self, author_id: Uuid) -> VerityResult<Vec<Feedback>> {
        self.require_author(author_id).await?;
        self.feedback.list_by_author(author_id).await
    }

    pub async fn by_claim(&self, claim_id: Uuid) -> VerityResult<Vec<Feedback>> {
        self.require_claim(claim_id).await?;
        self.feedback.list_by_claim(claim_id).await
    }

    pub async fn get(&self, feedback_id: Uuid) -> VerityResult<Feedback> {
        self.feedback
            .get_by_id(feedback_id)
            .await?
            .ok_or_else(|| VerityError::NotFound(format!("feedback {feedback_id}")))
    }

    /// Remove one reaction. Returns the removed row.
    pub async fn delete(&self, feedback_id: Uuid) -> VerityResult<Feedback> {
        let existing = self.get(feedback_id).await?;

        if !self.feedback.delete(feedback_id).await? {
            return Err(VerityError::NotFound(format!("feedback {feedback_id}")));
        }
        tracing::info!(%feedback_id, claim_id = %existing.claim_id, "feedback deleted");
        Ok(existing)
    }

    async fn require_author(&self, author_id: Uuid) -> VerityResult<()> {
        self.authors
            .get_by_id(author_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| VerityError::NotFound(format!("author {author_id}")))
    }

    async fn require_claim(&self, claim_id: Uuid) -> VerityResult<()> {
        self.claims
            .get_by_id(claim_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| VerityError::NotFound(format!("claim {claim_id}")))
    }
}
