pub mod client;
pub mod models;
pub mod parse;

use async_trait::async_trait;

pub use client::{AdjudicationClient, AdjudicationClientConfig, AdjudicationClientError};
pub use models::AdjudicationOutcome;
pub use parse::{parse_envelope, parse_outcome_text, ParseFailure};

/// Turns an adjudication prompt into an outcome.
///
/// Implementations always resolve: when the model cannot be reached or its
/// answer cannot be read, they return [`AdjudicationOutcome::default`].
#[async_trait]
pub trait Adjudicator: Send + Sync {
    async fn adjudicate(&self, prompt: &str) -> AdjudicationOutcome;
}

/// No configured model means every claim stays pending.
#[async_trait]
impl<T: Adjudicator> Adjudicator for Option<T> {
    async fn adjudicate(&self, prompt: &str) -> AdjudicationOutcome {
        match self {
            Some(adjudicator) => adjudicator.adjudicate(prompt).await,
            None => AdjudicationOutcome::default(),
        }
    }
}
