//! Unified error types for the domain layer
//!
//! Domain operations are pure, so the only failures are rejected parameters
//! (page sizes, chart scales) and unparseable policy names.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., non-positive page size)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for policy names and other value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rejected parameters.
    ///
    /// # Example
    /// ```ignore
    /// if page_size == 0 {
    ///     return Err(DomainError::validation("page size must be greater than zero"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
