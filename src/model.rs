use serde::Serialize;
use url::Url;

pub const NO_TITLE: &str = "No title";
pub const NO_CONTENT: &str = "No content";
pub const NO_COMMENTS: &str = "No comments";

/// A validated Reddit thread URL
///
/// Built only by [`crate::validator::validate_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadReference {
    pub(crate) url: Url,
    pub(crate) subreddit: Option<String>,
    pub(crate) thread_id: Option<String>,
}

impl ThreadReference {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn subreddit(&self) -> Option<&str> {
        self.subreddit.as_deref()
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    /// Scheme and host of the thread URL, e.g. `https://www.reddit.com`
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// Path of the thread's JSON representation
    pub fn json_path(&self) -> String {
        match (&self.subreddit, &self.thread_id) {
            (Some(subreddit), Some(thread_id)) => {
                format!("/r/{}/comments/{}.json", subreddit, thread_id)
            }
            _ => {
                let path = self.url.path().trim_end_matches('/');
                if path.is_empty() {
                    "/.json".to_string()
                } else {
                    format!("{}.json", path)
                }
            }
        }
    }
}

/// Title, body and flattened comments recovered from a thread document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadContent {
    pub title: String,
    pub body: String,
    pub comments: String,
}

impl Default for ThreadContent {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            body: NO_CONTENT.to_string(),
            comments: NO_COMMENTS.to_string(),
        }
    }
}

impl ThreadContent {
    /// True when every field fell back to its placeholder
    pub fn is_placeholder_only(&self) -> bool {
        self == &ThreadContent::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The two-message prompt sent to the completion service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

impl SummaryRequest {
    pub fn user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// External response shape: `{ "summary": .. }` or `{ "error": .. }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    Summary { summary: String },
    Error { error: String },
}
