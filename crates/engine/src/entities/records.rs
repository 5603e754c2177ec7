//! Record fetching.
//!
//! Typed access to the creature API on top of [`ResourcePort`]. A document
//! that arrives but does not match the expected shape is reported as a
//! transport failure for that resource.

use std::sync::Arc;

use dexview_domain::{Creature, EvolutionNode, ResourceRef, Species, TypeRelation};
use futures_util::stream::{self, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;

use crate::infrastructure::pokeapi::wire::{
    CreatureDocument, EvolutionChainDocument, IndexDocument, SpeciesDocument, TypeDocument,
};
use crate::infrastructure::ports::{FetchError, ResourceKind, ResourceLocator, ResourcePort};

/// Record fetcher.
///
/// Batch operations are all-or-nothing and return results in input order.
/// When several members fail, the reported error is the first failure in
/// input order, not the first to arrive.
pub struct Records {
    port: Arc<dyn ResourcePort>,
    max_in_flight: usize,
}

impl Records {
    pub fn new(port: Arc<dyn ResourcePort>, max_in_flight: usize) -> Self {
        Self {
            port,
            max_in_flight: max_in_flight.max(1),
        }
    }

    async fn fetch_as<T: DeserializeOwned>(
        &self,
        locator: &ResourceLocator,
    ) -> Result<T, FetchError> {
        let document = self.port.fetch(locator).await?;
        serde_json::from_value(document).map_err(|e| {
            tracing::warn!(
                resource = %locator.kind(),
                locator = %locator,
                error = %e,
                "Unexpected document shape"
            );
            FetchError::transport(locator.kind(), locator, e)
        })
    }

    // =========================================================================
    // Single records
    // =========================================================================

    /// Fetch a creature by name or numeric id. Names are matched lowercase.
    pub async fn creature(&self, name_or_id: &str) -> Result<Creature, FetchError> {
        let key = name_or_id.trim().to_lowercase();
        let locator = ResourceLocator::creature(key);
        let document: CreatureDocument = self.fetch_as(&locator).await?;
        Ok(document.into())
    }

    /// Fetch a creature through a URL found in another document.
    pub async fn creature_at(&self, url: &str) -> Result<Creature, FetchError> {
        let locator = ResourceLocator::url(ResourceKind::Creature, url);
        let document: CreatureDocument = self.fetch_as(&locator).await?;
        Ok(document.into())
    }

    pub async fn species(&self, url: &str) -> Result<Species, FetchError> {
        let locator = ResourceLocator::url(ResourceKind::Species, url);
        let document: SpeciesDocument = self.fetch_as(&locator).await?;
        Ok(document.into())
    }

    pub async fn type_relation(&self, url: &str) -> Result<TypeRelation, FetchError> {
        let locator = ResourceLocator::url(ResourceKind::Type, url);
        let document: TypeDocument = self.fetch_as(&locator).await?;
        Ok(document.into())
    }

    pub async fn evolution_chain(&self, url: &str) -> Result<EvolutionNode, FetchError> {
        let locator = ResourceLocator::url(ResourceKind::EvolutionChain, url);
        let document: EvolutionChainDocument = self.fetch_as(&locator).await?;
        Ok(document.into())
    }

    /// First `limit` entries of the creature index, in index order.
    pub async fn creature_index(&self, limit: usize) -> Result<Vec<ResourceRef>, FetchError> {
        let document: IndexDocument = self.fetch_as(&ResourceLocator::index(limit)).await?;
        Ok(document.into_refs())
    }

    // =========================================================================
    // Batches
    // =========================================================================

    pub async fn type_relations(&self, urls: &[String]) -> Result<Vec<TypeRelation>, FetchError> {
        stream::iter(urls)
            .map(|url| self.type_relation(url))
            .buffered(self.max_in_flight)
            .try_collect()
            .await
    }

    pub async fn creatures_at(&self, urls: &[String]) -> Result<Vec<Creature>, FetchError> {
        stream::iter(urls)
            .map(|url| self.creature_at(url))
            .buffered(self.max_in_flight)
            .try_collect()
            .await
    }
}
