use crate::config::LlmConfig;
use crate::model::SummaryRequest;
use crate::providers::open_ai::build_client;
use crate::providers::{read_completion, SummaryProvider};
use crate::SummarizeError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

pub struct AzureOpenAIProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    deployment_name: String,
    api_version: String,
}

impl AzureOpenAIProvider {
    /// Create a new Azure OpenAI provider from configuration
    pub fn new(config: &LlmConfig) -> Result<Self, SummarizeError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SummarizeError::ServiceConfigurationError(
                    "AZURE_OPENAI_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let endpoint = config.endpoint.clone().ok_or_else(|| {
            SummarizeError::ServiceConfigurationError(
                "Azure OpenAI endpoint is required".to_string(),
            )
        })?;

        // Deployments are usually named after the model they serve
        let deployment_name = config
            .deployment_name
            .clone()
            .unwrap_or_else(|| config.model.clone());

        let api_version = config
            .api_version
            .clone()
            .unwrap_or_else(|| "2024-02-15-preview".to_string());

        Ok(AzureOpenAIProvider {
            client: build_client(config.timeout())?,
            api_key,
            endpoint,
            deployment_name,
            api_version,
        })
    }
}

#[async_trait]
impl SummaryProvider for AzureOpenAIProvider {
    fn provider_name(&self) -> &str {
        "azure_openai"
    }

    async fn complete(&self, request: &SummaryRequest) -> Result<String, SummarizeError> {
        // https://{endpoint}/openai/deployments/{deployment-name}/chat/completions?api-version={api-version}
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment_name,
            self.api_version
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&json!({
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
