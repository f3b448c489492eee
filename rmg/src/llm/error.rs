//! Failures of a chat completion call

use std::time::Duration;
use thiserror::Error;

/// Why a completion could not be obtained
///
/// Every variant collapses to the same message for the user; the distinction
/// only reaches the logs.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The backend answered 429
    #[error("Backend is throttling requests (retry after {retry_after:?})")]
    RateLimited { retry_after: Duration },

    /// Any other non-2xx answer; `message` is the raw body
    #[error("Backend returned HTTP {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request did not reach the backend: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected completion payload: {0}")]
    InvalidResponse(String),

    #[error("Unknown LLM provider: '{0}'. Supported: groq, openai")]
    UnknownProvider(String),

    #[error("Completion payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_message_carries_delay() {
        let err = LlmError::RateLimited {
            retry_after: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "Backend is throttling requests (retry after 30s)");
    }

    #[test]
    fn test_api_error_message_keeps_body() {
        let err = LlmError::ApiError {
            status: 401,
            message: "Invalid API Key".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned HTTP 401: Invalid API Key");
    }

    #[test]
    fn test_unknown_provider_message() {
        let err = LlmError::UnknownProvider("bedrock".to_string());
        assert_eq!(err.to_string(), "Unknown LLM provider: 'bedrock'. Supported: groq, openai");
    }

    #[test]
    fn test_json_error_converts() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(LlmError::from(source), LlmError::Json(_)));
    }
}
