//! Custom error types for the application.
//!
//! [`ApiError`] covers everything a request to the IFS backend can fail
//! with. Errors are never thrown past the controller; they end up either
//! in the inline error banner or in a toast notification.

use std::fmt;

/// Request-level failures from the IFS backend.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Transport failure (connection refused, CORS, DNS, ...)
    Network(String),
    /// Non-2xx response, with the server's message when it sent one
    Server {
        status: u16,
        message: Option<String>,
    },
    /// Response body could not be decoded
    Decode(String),
}

impl ApiError {
    /// Short message preferring server-supplied detail over the transport
    /// error, falling back to the generic display. Used for upload toasts.
    pub fn detail(&self) -> String {
        match self {
            Self::Server {
                message: Some(msg), ..
            } => msg.clone(),
            Self::Network(msg) if !msg.is_empty() => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Server {
                status,
                message: Some(msg),
            } => write!(f, "Server error {}: {}", status, msg),
            Self::Server {
                status,
                message: None,
            } => write!(f, "Server error {}", status),
            Self::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_the_server_message() {
        let err = ApiError::Server {
            status: 422,
            message: Some("File already exists".to_string()),
        };
        assert_eq!(err.detail(), "File already exists");
    }

    #[test]
    fn detail_falls_back_to_the_transport_error() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.detail(), "connection refused");
    }

    #[test]
    fn detail_falls_back_to_the_generic_display() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.detail(), "Server error 500");
    }
}
