use mockito::{Matcher, Server, ServerGuard};
use reddit_summarizer::error::{CONFIGURATION_MESSAGE, GENERIC_FAILURE_MESSAGE};
use reddit_summarizer::{
    ErrorKind, OpenAIProvider, SummarizerConfig, SummaryResponse, ThreadSummarizer,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const THREAD_URL: &str = "https://www.reddit.com/r/test/comments/abc123/title/";

const THREAD_JSON: &str = r#"[
    {"kind": "Listing", "data": {"children": [
        {"kind": "t3", "data": {"title": "Hello", "selftext": "World", "score": 12}}
    ]}},
    {"kind": "Listing", "data": {"children": [
        {"kind": "t1", "data": {"body": "Nice post", "score": 3}},
        {"kind": "more", "data": {"count": 4, "children": ["x1", "x2"]}}
    ]}}
]"#;

fn summarizer_for(reddit: &ServerGuard, llm: &ServerGuard) -> ThreadSummarizer {
    let provider = OpenAIProvider::with_base_url(
        "fake_api_key".to_string(),
        llm.url(),
        "gpt-3.5-turbo".to_string(),
    )
    .unwrap();
    ThreadSummarizer::builder()
        .reddit_base_url(reddit.url())
        .provider(Arc::new(provider))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_thread_to_summary() {
    let mut reddit = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let thread_mock = reddit
        .mock("GET", "/r/test/comments/abc123.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(THREAD_JSON)
        .expect(1)
        .create_async()
        .await;

    let completion_mock = llm
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "max_tokens": 500,
            "messages": [
                {"role": "system"},
                {
                    "role": "user",
                    "content": "Summarize this Reddit thread:\n\nTitle: Hello\n\nPost: World\n\nComments: Nice post"
                }
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [{
                    "message": {
                        "content": "**Overview:** A greeting.\n\n-\n- Commenters approve\n   - One said **nice**"
                    }
                }]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let summary = summarizer_for(&reddit, &llm)
        .summarize(THREAD_URL)
        .await
        .unwrap();

    assert_eq!(
        summary,
        "Overview: A greeting.\n- Commenters approve\n  - One said **nice**"
    );
    thread_mock.assert_async().await;
    completion_mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_url_makes_no_request() {
    let mut reddit = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let thread_mock = reddit
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let completion_mock = llm
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let summarizer = summarizer_for(&reddit, &llm);
    for input in ["not a url", "https://example.com/r/test/comments/abc123/"] {
        let err = summarizer.summarize(input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    thread_mock.assert_async().await;
    completion_mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_completion_is_reported() {
    let mut reddit = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let _thread = reddit
        .mock("GET", "/r/test/comments/abc123.json")
        .with_status(200)
        .with_body(THREAD_JSON)
        .create_async()
        .await;
    let _completion = llm
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let summarizer = summarizer_for(&reddit, &llm);
    let err = summarizer.summarize(THREAD_URL).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyResult);

    let response = summarizer.respond(THREAD_URL).await;
    assert_eq!(
        response,
        SummaryResponse::Error {
            error: GENERIC_FAILURE_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_credential_fails_before_fetch() {
    let mut reddit = Server::new_async().await;
    let thread_mock = reddit
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let summarizer = ThreadSummarizer::builder()
        .reddit_base_url(reddit.url())
        .build()
        .unwrap();

    for _ in 0..3 {
        let err = summarizer.summarize(THREAD_URL).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServiceConfigurationError);
    }
    assert_eq!(
        summarizer.respond(THREAD_URL).await,
        SummaryResponse::Error {
            error: CONFIGURATION_MESSAGE.to_string()
        }
    );

    thread_mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_failure_skips_completion() {
    let mut reddit = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let _thread = reddit
        .mock("GET", "/r/test/comments/abc123.json")
        .with_status(429)
        .with_body("Too Many Requests")
        .create_async()
        .await;
    let completion_mock = llm
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = summarizer_for(&reddit, &llm)
        .summarize(THREAD_URL)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UpstreamFetchFailure);
    completion_mock.assert_async().await;
}

#[tokio::test]
async fn test_completion_service_error() {
    let mut reddit = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let _thread = reddit
        .mock("GET", "/r/test/comments/abc123.json")
        .with_status(200)
        .with_body(THREAD_JSON)
        .create_async()
        .await;
    let _completion = llm
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body(r#"{"error": {"message": "internal upstream detail"}}"#)
        .create_async()
        .await;

    let response = summarizer_for(&reddit, &llm).respond(THREAD_URL).await;
    match response {
        SummaryResponse::Error { error } => {
            assert_eq!(error, GENERIC_FAILURE_MESSAGE);
            assert!(!error.contains("internal upstream detail"));
        }
        SummaryResponse::Summary { .. } => panic!("Expected an error response"),
    }
}

#[tokio::test]
async fn test_sub_second_timeout_reaches_both_services() {
    let mut reddit = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let thread_mock = reddit
        .mock("GET", "/r/test/comments/abc123.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(THREAD_JSON)
        .expect(1)
        .create_async()
        .await;
    let completion_mock = llm
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer fake_api_key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"content": "- Quick"}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let mut config = SummarizerConfig::default();
    config.llm.api_key = Some("fake_api_key".to_string());
    config.llm.base_url = Some(llm.url());

    let summarizer = ThreadSummarizer::builder()
        .config(config)
        .reddit_base_url(reddit.url())
        .timeout(Duration::from_millis(900))
        .build()
        .unwrap();

    assert_eq!(summarizer.summarize(THREAD_URL).await.unwrap(), "- Quick");
    thread_mock.assert_async().await;
    completion_mock.assert_async().await;
}
