//! Error types for port operations.

use super::resource::ResourceKind;

/// Fetch failures, with the resource kind and locator for actionable logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Upstream answered with a non-success status.
    #[error("{resource} not found: {locator}")]
    NotFound {
        resource: ResourceKind,
        locator: String,
    },

    /// Network failure or a body that could not be parsed.
    #[error("Transport error fetching {resource} {locator}: {message}")]
    Transport {
        resource: ResourceKind,
        locator: String,
        message: String,
    },
}

impl FetchError {
    /// Create a NotFound error with resource context.
    pub fn not_found(resource: ResourceKind, locator: impl ToString) -> Self {
        Self::NotFound {
            resource,
            locator: locator.to_string(),
        }
    }

    /// Create a Transport error with resource context.
    pub fn transport(
        resource: ResourceKind,
        locator: impl ToString,
        message: impl ToString,
    ) -> Self {
        Self::Transport {
            resource,
            locator: locator.to_string(),
            message: message.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn resource(&self) -> ResourceKind {
        match self {
            Self::NotFound { resource, .. } | Self::Transport { resource, .. } => *resource,
        }
    }
}
