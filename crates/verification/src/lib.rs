pub mod adjudication;
pub mod claims;
pub mod confidence;
pub mod evidence;
pub mod feedback;
pub mod orchestrator;
pub mod prompt;

#[cfg(test)]
mod test_support;

pub use adjudication::{
    AdjudicationClient, AdjudicationClientConfig, AdjudicationOutcome, Adjudicator,
};
pub use claims::{ClaimService, ClaimView};
pub use confidence::blend_confidence;
pub use evidence::{
    EvidenceBundle, FactCheckClient, FactCheckClientConfig, FactCheckSource, SearchClient,
    SearchClientConfig, SearchSource,
};
pub use feedback::FeedbackService;
pub use orchestrator::{ClaimVerifier, VerificationOrchestrator, VerificationResult};
