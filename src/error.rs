use thiserror::Error;

/// Shown when the submitted string is not a usable Reddit thread URL
pub const INVALID_INPUT_MESSAGE: &str = "Invalid URL. Please provide a valid Reddit thread URL.";

/// Shown when the service is missing a required secret
pub const CONFIGURATION_MESSAGE: &str = "Internal server error";

/// Shown for every other pipeline fault
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while summarizing the thread. Please try again.";

/// Errors that can occur while summarizing a thread
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The submitted string is not a well-formed Reddit URL
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network failure, non-success status or non-JSON body from the thread source
    #[error("Failed to fetch thread: {0}")]
    UpstreamFetchFailure(String),

    /// The thread document yielded nothing but placeholders
    #[error("Thread document has no recognizable post or comments")]
    MalformedSourceDocument,

    /// A credential required by the summarization service is absent
    #[error("Service configuration error: {0}")]
    ServiceConfigurationError(String),

    /// Non-success response or transport failure from the completion service
    #[error("Summarization failed: {0}")]
    SummarizationFailure(String),

    /// The completion call succeeded but carried no text
    #[error("Summarization service returned no completion text")]
    EmptyResult,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration loading error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Tag identifying which class of fault a [`SummarizeError`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    UpstreamFetchFailure,
    MalformedSourceDocument,
    ServiceConfigurationError,
    SummarizationFailure,
    EmptyResult,
}

impl SummarizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummarizeError::InvalidInput(_) => ErrorKind::InvalidInput,
            SummarizeError::UpstreamFetchFailure(_) => ErrorKind::UpstreamFetchFailure,
            SummarizeError::MalformedSourceDocument => ErrorKind::MalformedSourceDocument,
            SummarizeError::ServiceConfigurationError(_)
            | SummarizeError::BuilderError(_)
            | SummarizeError::Config(_) => ErrorKind::ServiceConfigurationError,
            SummarizeError::SummarizationFailure(_) => ErrorKind::SummarizationFailure,
            SummarizeError::EmptyResult => ErrorKind::EmptyResult,
        }
    }

    /// The fixed, non-technical message handed to callers.
    ///
    /// Never includes upstream error bodies or internal detail.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => INVALID_INPUT_MESSAGE,
            ErrorKind::ServiceConfigurationError => CONFIGURATION_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        SummarizeError::UpstreamFetchFailure(err.to_string())
    }
}
