mod request;

pub use request::RequestFetcher;

use crate::model::ThreadReference;
use crate::SummarizeError;
use async_trait::async_trait;
use serde_json::Value;

/// Retrieves the raw JSON document behind a thread reference
#[async_trait]
pub trait ThreadFetcher: Send + Sync {
    async fn fetch(&self, thread: &ThreadReference) -> Result<Value, SummarizeError>;
}
