use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use verity_config::{env_or, env_parse_or};

use super::models::SearchResponse;
use super::SearchSource;

#[derive(Debug, Clone)]
pub struct SearchClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub engine_id: String,
    pub timeout_secs: u64,
}

impl SearchClientConfig {
    /// Returns `None` unless both `SEARCH_API_KEY` and `SEARCH_ENGINE_ID` are set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("SEARCH_API_KEY").ok()?;
        let engine_id = std::env::var("SEARCH_ENGINE_ID").ok()?;

        Some(Self {
            base_url: env_or("SEARCH_BASE_URL", "https://www.googleapis.com"),
            api_key,
            engine_id,
            timeout_secs: env_parse_or("SEARCH_TIMEOUT_SECS", 10),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchClientError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    config: SearchClientConfig,
}

impl SearchClient {
    pub fn new(config: SearchClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Run a web search for `query`; items come back in upstream rank order.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchClientError> {
        let url = format!("{}/customsearch/v1", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchClientError::HttpError { status, body });
        }

        Ok(response.json::<SearchResponse>().await?)
    }
}

#[async_trait]
impl SearchSource for SearchClient {
    async fn fetch(&self, query: &str) -> SearchResponse {
        match self.search(query).await {
            Ok(response) => {
                tracing::debug!(items = response.items.len(), "search evidence fetched");
                response
            }
            Err(e) => {
                tracing::warn!(source = "search", error = %e, "evidence unavailable");
                SearchResponse::default()
            }
        }
    }
}
