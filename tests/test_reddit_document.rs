use reddit_summarizer::model::{NO_COMMENTS, NO_CONTENT};
use reddit_summarizer::{extract_content, validate_url};
use serde_json::Value;

// Trimmed copy of a real /comments/{id}.json response
const LINK_POST_JSON: &str = r#"[
  {
    "kind": "Listing",
    "data": {
      "after": null,
      "dist": 1,
      "children": [
        {
          "kind": "t3",
          "data": {
            "subreddit": "rust",
            "selftext": "",
            "title": "Announcing Rust 1.80.0",
            "url": "https://blog.rust-lang.org/2024/07/25/Rust-1.80.0.html",
            "num_comments": 3,
            "edited": false
          }
        }
      ],
      "before": null
    }
  },
  {
    "kind": "Listing",
    "data": {
      "children": [
        {
          "kind": "t1",
          "data": {
            "body": "LazyCell and LazyLock are finally stable!",
            "edited": false,
            "replies": {
              "kind": "Listing",
              "data": {"children": [{"kind": "t1", "data": {"body": "nested reply"}}]}
            }
          }
        },
        {
          "kind": "t1",
          "data": {"body": "[deleted]", "replies": ""}
        },
        {
          "kind": "more",
          "data": {"count": 1, "children": ["lf0abc"]}
        }
      ]
    }
  }
]"#;

#[test]
fn test_link_post_with_comment_tree() {
    let document: Value = serde_json::from_str(LINK_POST_JSON).unwrap();
    let content = extract_content(&document);

    assert_eq!(content.title, "Announcing Rust 1.80.0");
    assert_eq!(content.body, NO_CONTENT);
    // Only top-level bodies are joined; nested replies and "more" stubs are not
    assert_eq!(
        content.comments,
        "LazyCell and LazyLock are finally stable!\n[deleted]"
    );
}

#[test]
fn test_error_payload_degrades_to_placeholders() {
    let document: Value =
        serde_json::from_str(r#"{"message": "Forbidden", "error": 403}"#).unwrap();
    let content = extract_content(&document);

    assert!(content.is_placeholder_only());
    assert_eq!(content.comments, NO_COMMENTS);
}

#[test]
fn test_thread_reference_from_share_url() {
    let thread = validate_url(
        "https://www.reddit.com/r/rust/comments/1ec2abc/announcing_rust_1800/?utm_source=share",
    )
    .unwrap();

    assert_eq!(thread.subreddit(), Some("rust"));
    assert_eq!(thread.thread_id(), Some("1ec2abc"));
    assert_eq!(thread.json_path(), "/r/rust/comments/1ec2abc.json");
}
