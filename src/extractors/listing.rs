use crate::model::{ThreadContent, NO_COMMENTS, NO_CONTENT, NO_TITLE};
use serde_json::Value;

/// Recover title, self-text and top-level comments from a thread document.
///
/// The document is expected to be `[post_listing, comment_listing]`, each a
/// listing with items under `data.children[*].data`. Nothing about that shape
/// is trusted: a missing, null or wrongly typed value at any level falls back
/// to the matching placeholder. Empty strings count as missing.
pub fn extract_content(document: &Value) -> ThreadContent {
    let post = listing_children(document, 0).and_then(|children| item_data(children.first()?));

    ThreadContent {
        title: string_field(post, "title").unwrap_or_else(|| NO_TITLE.to_string()),
        body: string_field(post, "selftext").unwrap_or_else(|| NO_CONTENT.to_string()),
        comments: comments(document).unwrap_or_else(|| NO_COMMENTS.to_string()),
    }
}

fn listing_children(document: &Value, index: usize) -> Option<&Vec<Value>> {
    document
        .get(index)?
        .get("data")?
        .get("children")?
        .as_array()
}

fn item_data(item: &Value) -> Option<&Value> {
    item.get("data").filter(|data| data.is_object())
}

fn string_field(data: Option<&Value>, key: &str) -> Option<String> {
    data?
        .get(key)?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn comments(document: &Value) -> Option<String> {
    let joined = listing_children(document, 1)?
        .iter()
        .filter_map(|child| item_data(child)?.get("body")?.as_str())
        .collect::<Vec<&str>>()
        .join("\n");

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
