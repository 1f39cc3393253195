use crate::config::LlmConfig;
use crate::providers::{AzureOpenAIProvider, OpenAIProvider, SummaryProvider};
use crate::SummarizeError;
use std::sync::Arc;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the transport named by `config.provider`
    pub fn create(config: &LlmConfig) -> Result<Arc<dyn SummaryProvider>, SummarizeError> {
        match config.provider.as_str() {
            "openai" => Ok(Arc::new(OpenAIProvider::new(config)?)),
            "azure_openai" => Ok(Arc::new(AzureOpenAIProvider::new(config)?)),
            other => Err(SummarizeError::ServiceConfigurationError(format!(
                "Unknown provider: {} (available: {})",
                other,
                Self::available_providers().join(", ")
            ))),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "azure_openai"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn create_test_config(provider: &str) -> LlmConfig {
        LlmConfig {
            provider: provider.to_string(),
            api_key: Some("test-key".to_string()),
            endpoint: Some("https://test.openai.azure.com".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_openai_provider() {
        let provider = ProviderFactory::create(&create_test_config("openai")).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_create_azure_provider() {
        let provider = ProviderFactory::create(&create_test_config("azure_openai")).unwrap();
        assert_eq!(provider.provider_name(), "azure_openai");
    }

    #[test]
    fn test_create_unknown_provider() {
        let result = ProviderFactory::create(&create_test_config("unknown"));
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown provider: unknown"));
            assert!(e.to_string().contains("available: openai, azure_openai"));
        } else {
            panic!("expected an error for an unknown provider");
        }
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let mut config = create_test_config("openai");
        config.api_key = None;
        let err = ProviderFactory::create(&config).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ServiceConfigurationError);
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        assert_eq!(providers, vec!["openai", "azure_openai"]);
    }
}
