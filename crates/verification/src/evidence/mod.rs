pub mod factcheck;
pub mod models;
pub mod search;

use async_trait::async_trait;

pub use factcheck::{FactCheckClient, FactCheckClientConfig, FactCheckClientError};
pub use models::{
    ClaimReview, EvidenceBundle, FactCheckClaim, FactCheckResponse, Publisher, SearchItem,
    SearchResponse,
};
pub use search::{SearchClient, SearchClientConfig, SearchClientError};

/// Source of published fact-check ratings for a claim.
///
/// Implementations never fail: any transport, status or decode problem
/// yields an empty response.
#[async_trait]
pub trait FactCheckSource: Send + Sync {
    async fn fetch(&self, query: &str) -> FactCheckResponse;
}

/// Source of ranked web search snippets for a claim. Never fails, like
/// [`FactCheckSource`].
#[async_trait]
pub trait SearchSource: Send + Sync {
    async fn fetch(&self, query: &str) -> SearchResponse;
}

/// An unconfigured source contributes no evidence.
#[async_trait]
impl<T: FactCheckSource> FactCheckSource for Option<T> {
    async fn fetch(&self, query: &str) -> FactCheckResponse {
        match self {
            Some(source) => source.fetch(query).await,
            None => FactCheckResponse::default(),
        }
    }
}

#[async_trait]
impl<T: SearchSource> SearchSource for Option<T> {
    async fn fetch(&self, query: &str) -> SearchResponse {
        match self {
            Some(source) => source.fetch(query).await,
            None => SearchResponse::default(),
        }
    }
}
