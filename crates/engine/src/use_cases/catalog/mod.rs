//! Catalog use cases.
//!
//! The catalog loads in two phases so the first page can render before the
//! full index has resolved.

use std::fmt;
use std::sync::Arc;

use dexview_domain::Creature;

use crate::entities::Records;
use crate::infrastructure::ports::FetchError;

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub load: Arc<LoadCatalog>,
}

impl CatalogUseCases {
    pub fn new(load: Arc<LoadCatalog>) -> Self {
        Self { load }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    /// Just enough records for the first page
    FirstPage,
    /// The whole configured catalog
    Full,
}

impl fmt::Display for CatalogPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstPage => write!(f, "first page"),
            Self::Full => write!(f, "full"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Catalog index unavailable ({phase} load): {source}")]
    Index {
        phase: CatalogPhase,
        source: FetchError,
    },
    #[error("Catalog records unavailable ({phase} load): {source}")]
    Records {
        phase: CatalogPhase,
        source: FetchError,
    },
}

impl CatalogLoadError {
    pub fn phase(&self) -> CatalogPhase {
        match self {
            Self::Index { phase, .. } | Self::Records { phase, .. } => *phase,
        }
    }
}

/// Fetch the index and resolve every entry into a full record.
pub struct LoadCatalog {
    records: Arc<Records>,
    page_size: usize,
    catalog_limit: usize,
}

impl LoadCatalog {
    pub fn new(records: Arc<Records>, page_size: usize, catalog_limit: usize) -> Self {
        Self {
            records,
            page_size,
            catalog_limit,
        }
    }

    pub fn limit(&self, phase: CatalogPhase) -> usize {
        match phase {
            CatalogPhase::FirstPage => self.page_size,
            CatalogPhase::Full => self.catalog_limit,
        }
    }

    /// Records in index order. All-or-nothing.
    pub async fn execute(&self, phase: CatalogPhase) -> Result<Vec<Creature>, CatalogLoadError> {
        let limit = self.limit(phase);
        let index = self
            .records
            .creature_index(limit)
            .await
            .map_err(|source| CatalogLoadError::Index { phase, source })?;

        let urls: Vec<String> = index.into_iter().map(|entry| entry.url).collect();
        let creatures = self
            .records
            .creatures_at(&urls)
            .await
            .map_err(|source| CatalogLoadError::Records { phase, source })?;

        tracing::info!(%phase, limit, count = creatures.len(), "Loaded catalog records");
        Ok(creatures)
    }
}
