use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use verity_config::{env_or, env_parse_or};

use super::models::FactCheckResponse;
use super::FactCheckSource;

#[derive(Debug, Clone)]
pub struct FactCheckClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl FactCheckClientConfig {
    /// Returns `None` when `FACTCHECK_API_KEY` is not set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("FACTCHECK_API_KEY").ok()?;

        Some(Self {
            base_url: env_or("FACTCHECK_BASE_URL", "https://factchecktools.googleapis.com"),
            api_key,
            timeout_secs: env_parse_or("FACTCHECK_TIMEOUT_SECS", 10),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FactCheckClientError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Client for the claims-search endpoint. One attempt per query, bounded by
/// `timeout_secs`.
#[derive(Clone)]
pub struct FactCheckClient {
    client: Client,
    config: FactCheckClientConfig,
}

impl FactCheckClient {
    pub fn new(config: FactCheckClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Query published fact-checks matching `query`.
    pub async fn search_claims(
        &self,
        query: &str,
    ) -> Result<FactCheckResponse, FactCheckClientError> {
        let url = format!("{}/v1alpha1/claims:search", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FactCheckClientError::HttpError { status, body });
        }

        Ok(response.json::<FactCheckResponse>().await?)
    }
}

#[async_trait]
impl FactCheckSource for FactCheckClient {
    async fn fetch(&self, query: &str) -> FactCheckResponse {
        match self.search_claims(query).await {
            Ok(response) => {
                tracing::debug!(claims = response.claims.len(), "fact-check evidence fetched");
                response
            }
            Err(e) => {
                tracing::warn!(source = "factcheck", error = %e, "evidence unavailable");
                FactCheckResponse::default()
            }
        }
    }
}
