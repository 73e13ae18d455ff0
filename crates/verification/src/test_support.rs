//! In-memory repositories and verifiers shared by service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use verity_common::error::VerityResult;
use verity_db::authors::models::Author;
use verity_db::authors::repositories::AuthorRepository;
use verity_db::claims::models::{Claim, Verdict};
use verity_db::claims::repositories::ClaimRepository;
use verity_db::feedback::models::Feedback;
use verity_db::feedback::repositories::FeedbackRepository;

use crate::evidence::{FactCheckResponse, SearchResponse};
use crate::orchestrator::{ClaimVerifier, VerificationResult};

#[derive(Clone, Default)]
pub struct MockClaimRepo {
    pub claims: Arc<Mutex<Vec<Claim>>>,
}

#[async_trait]
impl ClaimRepository for MockClaimRepo {
    async fn find_by_content_and_author(
        &self,
        content: &str,
        author_id: Uuid,
    ) -> VerityResult<Option<Claim>> {
        Ok(self
            .claims
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.content == content && c.author_id == author_id)
            .cloned())
    }

    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Claim>> {
        Ok(self
            .claims
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn save(&self, claim: Claim) -> VerityResult<Claim> {
        let mut claims = self.claims.lock().unwrap();
        if let Some(existing) = claims
            .iter()
            .find(|c| c.content == claim.content && c.author_id == claim.author_id)
        {
            return Ok(existing.clone());
        }
        claims.push(claim.clone());
        Ok(claim)
    }

    async fn delete(&self, id: Uuid) -> VerityResult<bool> {
        let mut claims = self.claims.lock().unwrap();
        let before = claims.len();
        claims.retain(|c| c.id != id);
        Ok(claims.len() != before)
    }
}

#[derive(Clone, Default)]
pub struct MockFeedbackRepo {
    pub feedback: Arc<Mutex<Vec<Feedback>>>,
}

#[async_trait]
impl FeedbackRepository for MockFeedbackRepo {
    async fn upsert(&self, feedback: Feedback) -> VerityResult<Feedback> {
        let mut rows = self.feedback.lock().unwrap();
        if let Some(existing) = rows
            .iter_mut()
            .find(|f| f.author_id == feedback.author_id && f.claim_id == feedback.claim_id)
        {
            existing.liked = feedback.liked;
            return Ok(existing.clone());
        }
        rows.push(feedback.clone());
        Ok(feedback)
    }

    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Feedback>> {
        Ok(self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    async fn count_by_claim(&self, claim_id: Uuid) -> VerityResult<(i64, i64)> {
        let rows = self.feedback.lock().unwrap();
        let likes = rows
            .iter()
            .filter(|f| f.claim_id == claim_id && f.liked)
            .count() as i64;
        let dislikes = rows
            .iter()
            .filter(|f| f.claim_id == claim_id && !f.liked)
            .count() as i64;
        Ok((likes, dislikes))
    }

    async fn list_by_claim(&self, claim_id: Uuid) -> VerityResult<Vec<Feedback>> {
        Ok(self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.claim_id == claim_id)
            .cloned()
            .collect())
    }

    async fn list_by_author(&self, author_id: Uuid) -> VerityResult<Vec<Feedback>> {
        Ok(self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> VerityResult<bool> {
        let mut rows = self.feedback.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.id != id);
        Ok(rows.len() != before)
    }

    async fn delete_by_claim(&self, claim_id: Uuid) -> VerityResult<u64> {
        let mut rows = self.feedback.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.claim_id != claim_id);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub struct MockAuthorRepo {
    pub authors: Arc<Mutex<Vec<Author>>>,
}

impl MockAuthorRepo {
    pub fn with_author(&self, name: &str) -> Uuid {
        let author = Author {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase()),
            created_at: Utc::now(),
        };
        let id = author.id;
        self.authors.lock().unwrap().push(author);
        id
    }
}

#[async_trait]
impl AuthorRepository for MockAuthorRepo {
    async fn get_by_id(&self, id: Uuid) -> VerityResult<Option<Author>> {
        Ok(self
            .authors
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }
}

/// Answers every claim with the same verdict and counts invocations.
#[derive(Clone)]
pub struct CountingVerifier {
    pub verdict: Verdict,
    pub confidence: i32,
    pub calls: Arc<AtomicUsize>,
}

impl CountingVerifier {
    pub fn new(verdict: Verdict, confidence: i32) -> Self {
        Self {
            verdict,
            confidence,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClaimVerifier for CountingVerifier {
    async fn verify(&self, _content: &str) -> VerificationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        VerificationResult {
            verdict: self.verdict,
            confidence: self.confidence,
            summary: format!("verdict {}", self.verdict),
            fact_check: FactCheckResponse::default(),
            search: SearchResponse::default(),
        }
    }
}
