/// Error types for the DevOps notification relay
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Event parsing error: {0}")]
    Parse(String),

    #[error("CodeCommit error: {0}")]
    CodeCommit(String),

    #[error("CodePipeline error: {0}")]
    CodePipeline(String),

    #[error("IAM error: {0}")]
    Iam(String),

    #[error("SES error: {0}")]
    Ses(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl NotifyError {
    /// Determines if an error is retriable
    ///
    /// Nothing is retried by the relay itself; the classification only ends
    /// up in log fields so failed deliveries can be triaged from the logs.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::CodeCommit(_) => true,
            Self::CodePipeline(_) => true,
            Self::Iam(_) => true,
            Self::Ses(_) => true, // throttling and transient SES failures
            Self::Parse(_) => false,
            Self::Config(_) => false,
            Self::Validation(_) => false,
        }
    }

    /// Short label used as the `error_type` log field
    pub fn kind(&self) -> &'static str {
        if self.is_retriable() {
            "retriable"
        } else {
            "permanent"
        }
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::env::VarError> for NotifyError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}
