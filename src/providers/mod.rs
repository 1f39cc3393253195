mod azure_openai;
mod factory;
mod open_ai;
mod prompt;

pub use azure_openai::AzureOpenAIProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_request, user_message, THREAD_SUMMARY_PROMPT};

use crate::model::SummaryRequest;
use crate::SummarizeError;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;

/// Unified trait for completion service transports
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "azure_openai")
    fn provider_name(&self) -> &str;

    /// Request exactly one completion and return its text
    async fn complete(&self, request: &SummaryRequest) -> Result<String, SummarizeError>;
}

/// Check the status of a chat completion response and pull out
/// `choices[0].message.content`.
pub(crate) async fn read_completion(response: reqwest::Response) -> Result<String, SummarizeError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SummarizeError::SummarizationFailure(format!(
            "completion request failed with status {}: {}",
            status, body
        )));
    }

    let response_body: Value = response
        .json()
        .await
        .map_err(|e| SummarizeError::SummarizationFailure(e.to_string()))?;
    debug!("{:?}", response_body);

    match response_body["choices"][0]["message"]["content"].as_str() {
        Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
        _ => Err(SummarizeError::EmptyResult),
    }
}
