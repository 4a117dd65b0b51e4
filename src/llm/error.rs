//! Backend error types shared by all LLM client implementations.

use thiserror::Error;

/// Errors that can occur while talking to an LLM provider
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// API request failed with the given message
    #[error("API error: {message}")]
    ApiError { message: String },

    /// Authentication failed or credentials are invalid
    #[error("Authentication failed: {message}")]
    AuthenticationError { message: String },

    /// Request timed out after the specified duration (in seconds)
    #[error("Request timed out after {seconds} seconds")]
    TimeoutError { seconds: u64 },

    /// Invalid or malformed response from the LLM
    #[error("Invalid response from LLM: {message}")]
    InvalidResponse { message: String },

    /// Configuration error (missing API keys, invalid settings, etc.)
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    /// Generic error for other cases
    #[error("{message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::TimeoutError { seconds: 30 };
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");

        let err = BackendError::ApiError {
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API error: rate limited");
    }
}
