use crate::builder::SummarizerBuilder;
use crate::extractors::extract_content;
use crate::fetchers::ThreadFetcher;
use crate::model::{SummaryResponse, ThreadReference};
use crate::normalizer::normalize_summary;
use crate::providers::{build_request, SummaryProvider};
use crate::validator::validate_url;
use crate::SummarizeError;
use log::{debug, error, info, warn};
use std::fmt;
use std::sync::Arc;

/// Pipeline stages, in the order a request moves through them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Fetching,
    Extracting,
    Summarizing,
    Normalizing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Fetching => "fetching",
            Stage::Extracting => "extracting",
            Stage::Summarizing => "summarizing",
            Stage::Normalizing => "normalizing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Completion backend, or the reason none could be built
pub(crate) enum Backend {
    Ready(Arc<dyn SummaryProvider>),
    Unconfigured(String),
}

/// Runs validate → fetch → extract → summarize → normalize for one URL.
///
/// Holds no per-request state, so one instance can serve concurrent
/// requests.
pub struct ThreadSummarizer {
    pub(crate) fetcher: Arc<dyn ThreadFetcher>,
    pub(crate) backend: Backend,
    pub(crate) max_tokens: u32,
    pub(crate) strict_extraction: bool,
}

impl ThreadSummarizer {
    /// Creates a new builder for a summarizer
    pub fn builder() -> SummarizerBuilder {
        SummarizerBuilder::default()
    }

    pub fn new(
        fetcher: Arc<dyn ThreadFetcher>,
        provider: Arc<dyn SummaryProvider>,
        max_tokens: u32,
    ) -> Self {
        Self {
            fetcher,
            backend: Backend::Ready(provider),
            max_tokens,
            strict_extraction: false,
        }
    }

    /// True when a completion backend is available
    pub fn is_configured(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Summarize the thread at `input`, returning normalized text.
    ///
    /// Any failure short-circuits the remaining stages. Nothing is retried.
    pub async fn summarize(&self, input: &str) -> Result<String, SummarizeError> {
        let provider = match &self.backend {
            Backend::Ready(provider) => provider,
            Backend::Unconfigured(reason) => {
                return Err(SummarizeError::ServiceConfigurationError(reason.clone()))
            }
        };

        enter(Stage::Validating);
        let thread = validate_url(input)?;

        enter(Stage::Fetching);
        let document = self.fetcher.fetch(&thread).await?;

        enter(Stage::Extracting);
        let content = extract_content(&document);
        if content.is_placeholder_only() {
            if self.strict_extraction {
                return Err(SummarizeError::MalformedSourceDocument);
            }
            warn!(
                "{} ({}), continuing with placeholders",
                SummarizeError::MalformedSourceDocument,
                thread.url()
            );
        }

        enter(Stage::Summarizing);
        let request = build_request(&content, self.max_tokens);
        debug!("Requesting completion from {}", provider.provider_name());
        let raw = provider.complete(&request).await?;

        enter(Stage::Normalizing);
        let summary = normalize_summary(&raw);
        if summary.is_empty() {
            return Err(SummarizeError::EmptyResult);
        }

        enter(Stage::Done);
        log_done(&thread);
        Ok(summary)
    }

    /// Run the pipeline and translate the outcome into the external shape.
    ///
    /// Failures are logged with full detail; the caller only ever sees the
    /// fixed message for the error's kind.
    pub async fn respond(&self, input: &str) -> SummaryResponse {
        match self.summarize(input).await {
            Ok(summary) => SummaryResponse::Summary { summary },
            Err(e) => {
                enter(Stage::Failed);
                error!("Error summarizing {:?}: {} ({:?})", input, e, e.kind());
                SummaryResponse::Error {
                    error: e.user_message().to_string(),
                }
            }
        }
    }
}

fn enter(stage: Stage) {
    debug!("pipeline stage: {}", stage);
}

fn log_done(thread: &ThreadReference) {
    info!(
        "Summarized thread {}",
        thread.thread_id().unwrap_or(thread.url().as_str())
    );
}
