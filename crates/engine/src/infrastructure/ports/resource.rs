//! Resource locators and the fetch port.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use super::error::FetchError;

/// The classes of document the creature API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Creature,
    CreatureIndex,
    Species,
    Type,
    EvolutionChain,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creature => write!(f, "creature"),
            Self::CreatureIndex => write!(f, "creature index"),
            Self::Species => write!(f, "species"),
            Self::Type => write!(f, "type"),
            Self::EvolutionChain => write!(f, "evolution chain"),
        }
    }
}

/// Where a document lives.
///
/// Creatures and the index are addressed relative to the API base; every
/// other resource is reached through an absolute URL embedded in a document
/// fetched earlier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceLocator {
    /// `{base}/pokemon/{name-or-id}`
    CreatureByName(String),
    /// `{base}/pokemon?limit={limit}`
    CreatureIndex { limit: usize },
    /// An absolute URL taken from another document
    Url { kind: ResourceKind, url: String },
}

impl ResourceLocator {
    pub fn creature(name_or_id: impl Into<String>) -> Self {
        Self::CreatureByName(name_or_id.into())
    }

    pub fn index(limit: usize) -> Self {
        Self::CreatureIndex { limit }
    }

    pub fn url(kind: ResourceKind, url: impl Into<String>) -> Self {
        Self::Url {
            kind,
            url: url.into(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::CreatureByName(_) => ResourceKind::Creature,
            Self::CreatureIndex { .. } => ResourceKind::CreatureIndex,
            Self::Url { kind, .. } => *kind,
        }
    }

    /// Full request URL against `base_url` (trailing slash optional).
    pub fn resolve(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Self::CreatureByName(name) => format!("{base}/pokemon/{name}"),
            Self::CreatureIndex { limit } => format!("{base}/pokemon?limit={limit}"),
            Self::Url { url, .. } => url.clone(),
        }
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreatureByName(name) => write!(f, "{name}"),
            Self::CreatureIndex { limit } => write!(f, "limit={limit}"),
            Self::Url { url, .. } => write!(f, "{url}"),
        }
    }
}

/// Read-only access to the creature API.
///
/// Implementations map a non-success status to [`FetchError::NotFound`] and
/// network or body failures to [`FetchError::Transport`]. No retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourcePort: Send + Sync {
    async fn fetch(&self, locator: &ResourceLocator) -> Result<Value, FetchError>;
}
