use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use verity_config::{env_or, env_parse_or};

use super::models::{AdjudicationOutcome, GenerateContentRequest};
use super::parse::parse_envelope;
use super::Adjudicator;

#[derive(Debug, Clone)]
pub struct AdjudicationClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl AdjudicationClientConfig {
    /// Returns `None` when `ADJUDICATION_API_KEY` is not set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("ADJUDICATION_API_KEY").ok()?;

        Some(Self {
            base_url: env_or(
                "ADJUDICATION_BASE_URL",
                "https://generativelanguage.googleapis.com",
            ),
            api_key,
            model: env_or("ADJUDICATION_MODEL", "gemini-2.5-flash"),
            timeout_secs: env_parse_or("ADJUDICATION_TIMEOUT_SECS", 15),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdjudicationClientError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Client for a generative model's `generateContent` endpoint.
#[derive(Clone)]
pub struct AdjudicationClient {
    client: Client,
    config: AdjudicationClientConfig,
}

impl AdjudicationClient {
    pub fn new(config: AdjudicationClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Send `prompt` and return the raw response body.
    pub async fn generate(&self, prompt: &str) -> Result<String, AdjudicationClientError> {
        let url = format!(
            "{}/v1/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdjudicationClientError::HttpError { status, body });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Adjudicator for AdjudicationClient {
    async fn adjudicate(&self, prompt: &str) -> AdjudicationOutcome {
        match self.generate(prompt).await {
            Ok(raw) => parse_envelope(&raw),
            Err(e) => {
                tracing::warn!(model = %self.config.model, error = %e, "adjudication call failed");
                AdjudicationOutcome::default()
            }
        }
    }
}
