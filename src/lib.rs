//! Summarize Reddit discussion threads with an LLM completion service.
//!
//! A request moves through a fixed chain: the URL is validated, the thread's
//! JSON is fetched, title/body/comments are pulled out with placeholders for
//! anything missing, a two-message prompt is sent to the completion service,
//! and the returned text is normalized for display.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = reddit_summarizer::summarize_thread(
//!     "https://www.reddit.com/r/rust/comments/abc123/some_thread/",
//! )
//! .await?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod normalizer;
pub mod providers;
pub mod server;
pub mod summarizer;
pub mod validator;

pub use builder::SummarizerBuilder;
pub use self::config::SummarizerConfig;
pub use error::{ErrorKind, SummarizeError};
pub use extractors::extract_content;
pub use fetchers::{RequestFetcher, ThreadFetcher};
pub use model::{SummaryRequest, SummaryResponse, ThreadContent, ThreadReference};
pub use normalizer::normalize_summary;
pub use providers::{AzureOpenAIProvider, OpenAIProvider, ProviderFactory, SummaryProvider};
pub use summarizer::{Stage, ThreadSummarizer};
pub use validator::validate_url;

/// Summarize the thread at `url` using configuration from `config.toml` and
/// the environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use reddit_summarizer::summarize_thread;
///
/// let summary = summarize_thread("https://www.reddit.com/r/rust/comments/abc123/").await?;
/// # Ok(())
/// # }
/// ```
pub async fn summarize_thread(url: &str) -> Result<String, SummarizeError> {
    let config = SummarizerConfig::load()?;
    ThreadSummarizer::builder()
        .config(config)
        .build()?
        .summarize(url)
        .await
}
