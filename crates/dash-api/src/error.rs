//! Error types for API calls.

use thiserror::Error;

/// Errors returned by the dashboard API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}{}", message_suffix(.message))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the `{ "error": ... }` body, if any.
        message: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The server answered `{ "succeeded": false }`.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The client could not be built from its configuration.
    #[error("invalid API configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Message reported by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Rejected(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Returns a user-friendly error message suitable for display in the UI.
    ///
    /// Prefers the server's own message when there is one.
    #[must_use]
    pub fn user_message(&self) -> &str {
        if let Some(message) = self.server_message() {
            return message;
        }
        match self {
            Self::Network(_) => "Could not reach the server. Please check your connection.",
            Self::Status { status: 401 | 403, .. } => {
                "You are not allowed to perform this action."
            }
            Self::Status { status: 404, .. } => "The requested item no longer exists.",
            Self::Status { .. } | Self::Rejected(_) => "The server could not complete the request.",
            Self::Decode(_) => "The server sent an unexpected response.",
            Self::Config(_) => "The API connection is misconfigured.",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Title already taken".to_string()),
        };
        assert_eq!(err.user_message(), "Title already taken");
        assert_eq!(err.to_string(), "HTTP 400: Title already taken");
    }

    #[test]
    fn test_generic_messages() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert!(err.user_message().contains("could not complete"));
        assert_eq!(err.to_string(), "HTTP 500");

        let err = ApiError::Network("connection refused".to_string());
        assert!(err.user_message().contains("connection"));
    }
}
