use crate::config::LlmConfig;
use crate::model::SummaryRequest;
use crate::providers::{read_completion, SummaryProvider};
use crate::SummarizeError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &LlmConfig) -> Result<Self, SummarizeError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SummarizeError::ServiceConfigurationError(
                    "OPENAI_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenAIProvider {
            client: build_client(config.timeout())?,
            api_key,
            base_url,
            model: config.model.clone(),
        })
    }

    /// Create a provider against a custom OpenAI-compatible endpoint with
    /// the default timeout
    pub fn with_base_url(
        api_key: String,
        base_url: String,
        model: String,
    ) -> Result<Self, SummarizeError> {
        Self::new(&LlmConfig {
            api_key: Some(api_key),
            base_url: Some(base_url),
            model,
            ..Default::default()
        })
    }
}

pub(crate) fn build_client(timeout: Duration) -> Result<Client, SummarizeError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SummarizeError::BuilderError(format!("Failed to create HTTP client: {}", e)))
}

#[async_trait]
impl SummaryProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &SummaryRequest) -> Result<String, SummarizeError> {
        let response = self
            .client
            .post(format!(
                "{}/v1/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": request.messages,
                "max_tokens": request.max_tokens,
                "n": 1
            }))
            .send()
            .await
            .map_err(|e| SummarizeError::SummarizationFailure(e.to_string()))?;

        read_completion(response).await
    }
}
