use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SummarizerConfig {
    /// Inbound HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Thread source settings
    #[serde(default)]
    pub reddit: RedditConfig,
    /// Summarization service settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// Field extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Configuration for the inbound HTTP endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Shared secret expected as `Authorization: Bearer <secret>` on `/api/*`
    pub api_secret_key: Option<String>,
    /// Public base URL of the deployment
    pub base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_secret_key: None,
            base_url: None,
        }
    }
}

/// Configuration for fetching thread JSON
#[derive(Debug, Deserialize, Clone)]
pub struct RedditConfig {
    /// Origin override (scheme + host) for the JSON endpoint
    pub base_url: Option<String>,
    /// Pre-encoded Basic credential
    pub credential: Option<String>,
    /// Client id, combined with `client_secret` when no credential is given
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds, fractions allowed
    #[serde(default = "default_timeout")]
    pub timeout: f64,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            credential: None,
            client_id: None,
            client_secret: None,
            user_agent: default_user_agent(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the completion service
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Transport name ("openai" or "azure_openai")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier (e.g., "gpt-3.5-turbo")
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
    /// Resource endpoint (Azure OpenAI specific)
    pub endpoint: Option<String>,
    /// Deployment name (Azure OpenAI specific)
    pub deployment_name: Option<String>,
    /// API version (Azure OpenAI specific)
    pub api_version: Option<String>,
    /// Request timeout in seconds, fractions allowed
    #[serde(default = "default_timeout")]
    pub timeout: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
            endpoint: None,
            deployment_name: None,
            api_version: None,
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExtractionConfig {
    /// Fail instead of degrading when a document yields only placeholders
    #[serde(default)]
    pub strict: bool,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_user_agent() -> String {
    "Reddit-Thread-Summarizer/1.0".to_string()
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_timeout() -> f64 {
    30.0
}

fn timeout_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs)
        .unwrap_or_else(|_| Duration::from_secs_f64(default_timeout()))
}

impl RedditConfig {
    pub fn timeout(&self) -> Duration {
        timeout_from_secs(self.timeout)
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        timeout_from_secs(self.timeout)
    }
}

impl SummarizerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with REDDIT_SUMMARIZER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Secrets left unset fall back to `OPENAI_API_KEY` (or
    /// `AZURE_OPENAI_API_KEY`), `REDDIT_API_KEY` and `API_SECRET_KEY`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = load_config()?;
        config.apply_env_secrets();
        Ok(config)
    }

    fn apply_env_secrets(&mut self) {
        if self.llm.api_key.is_none() {
            let var = match self.llm.provider.as_str() {
                "azure_openai" => "AZURE_OPENAI_API_KEY",
                _ => "OPENAI_API_KEY",
            };
            self.llm.api_key = non_empty_env(var);
        }
        if self.reddit.credential.is_none() {
            self.reddit.credential = non_empty_env("REDDIT_API_KEY");
        }
        if self.server.api_secret_key.is_none() {
            self.server.api_secret_key = non_empty_env("API_SECRET_KEY");
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Load configuration without the secret fallbacks
///
/// Environment variable format: REDDIT_SUMMARIZER__LLM__MODEL
pub fn load_config() -> Result<SummarizerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: REDDIT_SUMMARIZER__REDDIT__USER_AGENT
        .add_source(
            Environment::with_prefix("REDDIT_SUMMARIZER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
