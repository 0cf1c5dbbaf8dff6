//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! abstracting over transport-specific errors. The UI treats every variant the
//! same way: a generic "Error loading X" message scoped to the affected region.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Transport failure or non-2xx response
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A name supplied by the caller is not a valid token
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Request(msg) => ServiceError::Network(msg),
            ApiError::Http { status, message } => {
                ServiceError::Network(format!("HTTP {status}: {message}"))
            }
            ApiError::ParseError(msg) => ServiceError::Parse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_transport_failures_are_network_errors() {
        let http = ServiceError::from(ApiError::Http {
            status: 404,
            message: "Not Found".into(),
        });
        assert_eq!(http, ServiceError::Network("HTTP 404: Not Found".into()));

        let transport = ServiceError::from(ApiError::Request("connection refused".into()));
        assert!(matches!(transport, ServiceError::Network(_)));
    }

    #[test]
    fn body_decoding_failures_are_parse_errors() {
        let err = ServiceError::from(ApiError::ParseError("expected value".into()));
        assert!(matches!(err, ServiceError::Parse(_)));
    }
}
