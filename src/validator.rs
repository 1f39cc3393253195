use crate::model::ThreadReference;
use crate::SummarizeError;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

const REDDIT_DOMAIN: &str = "reddit.com";

fn thread_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^/r/([^/]+)/comments/([^/]+)").expect("valid thread pattern")
    })
}

/// Validate a user-supplied string as a Reddit thread URL.
///
/// The string must be an absolute http(s) URL whose host is `reddit.com` or
/// one of its subdomains. No network access happens here.
pub fn validate_url(input: &str) -> Result<ThreadReference, SummarizeError> {
    let input = input.trim();
    let url = Url::parse(input)
        .map_err(|e| SummarizeError::InvalidInput(format!("{:?} is not a URL: {}", input, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SummarizeError::InvalidInput(format!(
            "unsupported scheme {:?}",
            url.scheme()
        )));
    }

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    if !is_reddit_host(&host) {
        return Err(SummarizeError::InvalidInput(format!(
            "{:?} is not a Reddit host",
            host
        )));
    }

    let (subreddit, thread_id) = match thread_pattern().captures(url.path()) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().to_string()),
            caps.get(2).map(|m| m.as_str().to_string()),
        ),
        None => (None, None),
    };

    Ok(ThreadReference {
        url,
        subreddit,
        thread_id,
    })
}

fn is_reddit_host(host: &str) -> bool {
    host == REDDIT_DOMAIN || host.ends_with(".reddit.com")
}
