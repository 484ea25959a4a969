//! Error handling for resume-radar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("AI provider error (retryable: {retryable}): {message}")]
    Provider { message: String, retryable: bool },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Errors that steer the AI fallback rather than aborting the analysis.
    pub fn is_ai_fallback(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::Provider { .. })
    }

    pub fn provider<S: Into<String>>(message: S, retryable: bool) -> Self {
        Error::Provider {
            message: message.into(),
            retryable,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = Error::provider("quota exceeded", true);
        let msg = err.to_string();
        assert!(msg.contains("quota exceeded"));
        assert!(msg.contains("retryable: true"));

        let err = Error::provider("bad key", false);
        assert!(err.to_string().contains("retryable: false"));
    }

    #[test]
    fn test_fallback_classification() {
        assert!(Error::Configuration("no key".into()).is_ai_fallback());
        assert!(Error::provider("429", true).is_ai_fallback());
        assert!(!Error::UnknownRole("xyz".into()).is_ai_fallback());
        assert!(!Error::Persistence("disk".into()).is_ai_fallback());
    }
}
