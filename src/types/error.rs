//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Taxonomy
//!
//! - **Config**: fatal at startup (missing credential, invalid settings)
//! - **Provider**: request-time failures, rendered as `Error:` text by the dispatcher
//! - **Io/Json/Yaml**: system errors from config files and CLI output

use thiserror::Error;

/// Maximum number of response body characters kept in a status error
const MAX_ERROR_BODY_CHARS: usize = 200;

// =============================================================================
// Provider Error
// =============================================================================

/// Request-time failure from a single provider call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Transport failure (connect, TLS, timeout, body read)
    #[error("{provider} request failed: {message}")]
    Request { provider: String, message: String },

    /// Provider answered with a non-success HTTP status
    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    /// Success status but the body could not be understood
    #[error("could not parse {provider} response: {message}")]
    Parse { provider: String, message: String },

    /// Success status with no generated text
    #[error("{provider} returned an empty response")]
    EmptyResponse { provider: String },
}

impl ProviderError {
    pub fn request(provider: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Request {
            provider: provider.into(),
            message: err.to_string(),
        }
    }

    /// Build a status error, keeping only the head of the body
    pub fn status(provider: impl Into<String>, status: u16, body: &str) -> Self {
        let body = if body.chars().count() > MAX_ERROR_BODY_CHARS {
            let head: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            format!("{}...", head)
        } else {
            body.to_string()
        };
        Self::Status {
            provider: provider.into(),
            status,
            body,
        }
    }

    pub fn parse(provider: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            provider: provider.into(),
            message: err.to_string(),
        }
    }

    pub fn empty(provider: impl Into<String>) -> Self {
        Self::EmptyResponse {
            provider: provider.into(),
        }
    }

    /// HTTP status code, if the provider answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CareerError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Provider Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    // -------------------------------------------------------------------------
    // Startup Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CareerError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_parse_messages_differ() {
        let status = ProviderError::status("rapidapi", 500, "internal");
        let parse = ProviderError::parse("rapidapi", "expected value at line 1");

        assert!(status.to_string().contains("500"));
        assert!(!parse.to_string().contains("500"));
        assert_ne!(status.to_string(), parse.to_string());
        assert_eq!(status.status_code(), Some(500));
        assert_eq!(parse.status_code(), None);
    }

    #[test]
    fn test_status_body_truncated() {
        let body = "x".repeat(1000);
        let err = ProviderError::status("openai", 502, &body);
        match err {
            ProviderError::Status { body, .. } => {
                assert_eq!(body.len(), MAX_ERROR_BODY_CHARS + 3);
                assert!(body.ends_with("..."));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err: CareerError = ProviderError::empty("gemini").into();
        assert_eq!(err.to_string(), "gemini returned an empty response");
    }

    #[test]
    fn test_config_error_message() {
        let err = CareerError::Config("OpenAI API key not found".to_string());
        assert_eq!(err.to_string(), "Config error: OpenAI API key not found");
    }
}
