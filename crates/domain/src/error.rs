//! Unified error types for the domain layer
//!
//! Provides a common error type for domain construction failures so that the
//! client layers never have to pass raw strings around for invalid input.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., an empty or malformed name token)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error.
    ///
    /// Use this when a value object rejects its input:
    /// - Required tokens are empty
    /// - Tokens contain characters that would corrupt a request path or query
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Item name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
