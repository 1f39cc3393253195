use crate::model::{ChatMessage, Role, SummaryRequest, ThreadContent};

/// The system prompt used for summarizing threads.
///
/// Loaded from `prompt.txt` at compile time so it can be edited without
/// dealing with Rust string syntax.
pub const THREAD_SUMMARY_PROMPT: &str = include_str!("prompt.txt");

/// Render the per-thread user message.
pub fn user_message(content: &ThreadContent) -> String {
    format!(
        "Summarize this Reddit thread:\n\nTitle: {}\n\nPost: {}\n\nComments: {}",
        content.title, content.body, content.comments
    )
}

/// Build the two-message completion request for `content`.
pub fn build_request(content: &ThreadContent, max_tokens: u32) -> SummaryRequest {
    SummaryRequest {
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: THREAD_SUMMARY_PROMPT.trim().to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: user_message(content),
            },
        ],
        max_tokens,
    }
}
