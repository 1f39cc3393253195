use super::ThreadFetcher;
use crate::config::RedditConfig;
use crate::model::ThreadReference;
use crate::SummarizeError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;

/// Fetches thread JSON over HTTP, optionally with a Basic credential
pub struct RequestFetcher {
    client: Client,
    base_url: Option<String>,
    credential: Option<String>,
}

impl RequestFetcher {
    pub fn new(config: &RedditConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SummarizeError::BuilderError(format!("Failed to create HTTP client: {}", e)))?;

        let credential = config.credential.clone().or_else(|| {
            match (&config.client_id, &config.client_secret) {
                (Some(id), Some(secret)) => Some(STANDARD.encode(format!("{}:{}", id, secret))),
                _ => None,
            }
        });

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            credential,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Full URL of the JSON resource for `thread`
    pub fn resource_url(&self, thread: &ThreadReference) -> String {
        let origin = match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => thread.origin(),
        };
        format!("{}{}", origin, thread.json_path())
    }
}

#[async_trait]
impl ThreadFetcher for RequestFetcher {
    async fn fetch(&self, thread: &ThreadReference) -> Result<Value, SummarizeError> {
        let url = self.resource_url(thread);
        debug!("Fetching thread JSON from {}", url);

        let mut request = self.client.get(&url);
        if let Some(credential) = &self.credential {
            request = request.header(AUTHORIZATION, format!("Basic {}", credential));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SummarizeError::UpstreamFetchFailure(format!(
                "thread fetch failed with status: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| SummarizeError::UpstreamFetchFailure(format!("thread body is not JSON: {}", e)))
    }
}
