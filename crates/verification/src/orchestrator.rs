use async_trait::async_trait;
use serde::Serialize;
use verity_db::claims::models::Verdict;

use crate::adjudication::{AdjudicationOutcome, Adjudicator};
use crate::evidence::{
    EvidenceBundle, FactCheckResponse, FactCheckSource, SearchResponse, SearchSource,
};
use crate::prompt::build_prompt;

/// Outcome of one verification attempt, with the evidence it was grounded on.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub verdict: Verdict,
    pub confidence: i32,
    pub summary: String,
    pub fact_check: FactCheckResponse,
    pub search: SearchResponse,
}

impl VerificationResult {
    fn from_parts(outcome: AdjudicationOutcome, evidence: EvidenceBundle) -> Self {
        Self {
            verdict: outcome.verdict,
            confidence: outcome.confidence,
            summary: outcome.summary,
            fact_check: evidence.fact_check,
            search: evidence.search,
        }
    }
}

/// Produces a verdict for claim text. Never fails; degraded inputs give a
/// degraded (possibly pending) result.
#[async_trait]
pub trait ClaimVerifier: Send + Sync {
    async fn verify(&self, content: &str) -> VerificationResult;
}

/// Fetches evidence from both sources concurrently, renders the prompt and
/// asks the adjudicator.
pub struct VerificationOrchestrator<F: FactCheckSource, S: SearchSource, A: Adjudicator> {
    fact_check: F,
    search: S,
    adjudicator: A,
}

impl<F: FactCheckSource, S: SearchSource, A: Adjudicator> VerificationOrchestrator<F, S, A> {
    pub fn new(fact_check: F, search: S, adjudicator: A) -> Self {
        Self {
            fact_check,
            search,
            adjudicator,
        }
    }

    pub async fn gather_evidence(&self, content: &str) -> EvidenceBundle {
        let (fact_check, search) =
            tokio::join!(self.fact_check.fetch(content), self.search.fetch(content));
        EvidenceBundle { fact_check, search }
    }
}

#[async_trait]
impl<F, S, A> ClaimVerifier for VerificationOrchestrator<F, S, A>
where
    F: FactCheckSource,
    S: SearchSource,
    A: Adjudicator,
{
    async fn verify(&self, content: &str) -> VerificationResult {
        let start = std::time::Instant::now();

        let evidence = self.gather_evidence(content).await;
        if evidence.is_empty() {
            tracing::info!("no evidence gathered, adjudicating on claim text alone");
        }

        let prompt = build_prompt(content, &evidence);
        let outcome = self.adjudicator.adjudicate(&prompt).await;

        tracing::info!(
            verdict = %outcome.verdict,
            confidence = outcome.confidence,
            fact_checks = evidence.fact_check.claims.len(),
            search_results = evidence.search.items.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "claim verified"
        );

        VerificationResult::from_parts(outcome, evidence)
    }
}
