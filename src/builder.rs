use std::sync::Arc;
use std::time::Duration;

use log::warn;

use crate::config::SummarizerConfig;
use crate::fetchers::{RequestFetcher, ThreadFetcher};
use crate::providers::{ProviderFactory, SummaryProvider};
use crate::summarizer::{Backend, ThreadSummarizer};
use crate::SummarizeError;

/// Builder for configuring a [`ThreadSummarizer`]
#[derive(Default)]
pub struct SummarizerBuilder {
    config: Option<SummarizerConfig>,
    provider: Option<Arc<dyn SummaryProvider>>,
    fetcher: Option<Arc<dyn ThreadFetcher>>,
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    timeout: Option<Duration>,
    reddit_base_url: Option<String>,
    strict_extraction: Option<bool>,
}

impl SummarizerBuilder {
    /// Start from a loaded configuration instead of the defaults
    pub fn config(mut self, config: SummarizerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a specific completion backend
    ///
    /// # Example
    /// ```
    /// use reddit_summarizer::{OpenAIProvider, ThreadSummarizer};
    /// use std::sync::Arc;
    ///
    /// # fn main() -> Result<(), reddit_summarizer::SummarizeError> {
    /// let provider = OpenAIProvider::with_base_url(
    ///     "key".to_string(),
    ///     "http://localhost:8080".to_string(),
    ///     "gpt-3.5-turbo".to_string(),
    /// )?;
    /// let builder = ThreadSummarizer::builder().provider(Arc::new(provider));
    /// # Ok(())
    /// # }
    /// ```
    pub fn provider(mut self, provider: Arc<dyn SummaryProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Use a specific thread fetcher
    pub fn fetcher(mut self, fetcher: Arc<dyn ThreadFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Set the API key for the completion service
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the completion service
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the completion token budget
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set a timeout for both outbound calls
    ///
    /// # Example
    /// ```
    /// use reddit_summarizer::ThreadSummarizer;
    /// use std::time::Duration;
    ///
    /// let builder = ThreadSummarizer::builder().timeout(Duration::from_secs(15));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Fetch thread JSON from this origin instead of the thread URL's own
    pub fn reddit_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.reddit_base_url = Some(base_url.into());
        self
    }

    /// Fail on documents that yield only placeholders
    pub fn strict_extraction(mut self, strict: bool) -> Self {
        self.strict_extraction = Some(strict);
        self
    }

    /// Build the summarizer
    ///
    /// A missing or unusable completion credential does not fail here: the
    /// summarizer is still returned and rejects every request with
    /// `ServiceConfigurationError` before any fetch.
    ///
    /// # Errors
    /// Returns `SummarizeError::BuilderError` if an HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<ThreadSummarizer, SummarizeError> {
        let mut config = self.config.unwrap_or_default();

        if let Some(key) = self.api_key {
            config.llm.api_key = Some(key);
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(timeout) = self.timeout {
            config.llm.timeout = timeout.as_secs_f64();
            config.reddit.timeout = timeout.as_secs_f64();
        }
        if let Some(base_url) = self.reddit_base_url {
            config.reddit.base_url = Some(base_url);
        }
        if let Some(strict) = self.strict_extraction {
            config.extraction.strict = strict;
        }

        let fetcher: Arc<dyn ThreadFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(RequestFetcher::new(&config.reddit)?),
        };

        let backend = match self.provider {
            Some(provider) => Backend::Ready(provider),
            None => match ProviderFactory::create(&config.llm) {
                Ok(provider) => Backend::Ready(provider),
                Err(SummarizeError::ServiceConfigurationError(reason)) => {
                    warn!("Summarization service is not configured: {}", reason);
                    Backend::Unconfigured(reason)
                }
                Err(e) => return Err(e),
            },
        };

        Ok(ThreadSummarizer {
            fetcher,
            backend,
            max_tokens: config.llm.max_tokens,
            strict_extraction: config.extraction.strict,
        })
    }
}
