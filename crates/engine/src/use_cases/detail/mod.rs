//! Detail view use cases.
//!
//! Assembling a detail view runs in three stages:
//! 1. Fetch the creature, then its species
//! 2. Concurrently derive weaknesses, walk the evolution chain and resolve
//!    alternate forms
//! 3. Compose the view model
//!
//! Any failure aborts the assembly; partial views are never returned.

use std::sync::Arc;

use dexview_domain::{Creature, DetailView, EvolutionEntry, FormEntry, RadarConfig, Species};

mod evolution;
mod weakness;

pub use evolution::WalkEvolutionChain;
pub use weakness::DeriveWeaknesses;

use crate::entities::Records;
use crate::infrastructure::ports::FetchError;

/// Container for detail view use cases.
pub struct DetailUseCases {
    pub assemble: Arc<AssembleDetail>,
}

impl DetailUseCases {
    pub fn new(assemble: Arc<AssembleDetail>) -> Self {
        Self { assemble }
    }
}

/// Build the detail view model for one creature.
pub struct AssembleDetail {
    records: Arc<Records>,
    weaknesses: Arc<DeriveWeaknesses>,
    evolution: Arc<WalkEvolutionChain>,
    radar: RadarConfig,
}

impl AssembleDetail {
    pub fn new(
        records: Arc<Records>,
        weaknesses: Arc<DeriveWeaknesses>,
        evolution: Arc<WalkEvolutionChain>,
        radar: RadarConfig,
    ) -> Self {
        Self {
            records,
            weaknesses,
            evolution,
            radar,
        }
    }

    pub async fn execute(&self, name_or_id: &str) -> Result<DetailView, FetchError> {
        let creature = self.records.creature(name_or_id).await?;
        let species = self.records.species(&creature.species.url).await?;

        let type_refs = creature.type_refs();
        let (weaknesses, evolutions, forms) = tokio::try_join!(
            self.weaknesses.execute(&type_refs),
            self.evolutions(&creature, &species),
            self.forms(&species),
        )?;

        let view = DetailView::compose(
            &creature,
            &species,
            weaknesses,
            evolutions,
            forms,
            &self.radar,
        );

        tracing::info!(
            creature = %view.name,
            id = view.id,
            weaknesses = view.weaknesses.len(),
            evolutions = view.evolutions.len(),
            forms = view.forms.len(),
            "Assembled detail view"
        );
        Ok(view)
    }

    /// Species without a linked chain evolve nowhere: the strip is just
    /// the creature itself.
    async fn evolutions(
        &self,
        creature: &Creature,
        species: &Species,
    ) -> Result<Vec<EvolutionEntry>, FetchError> {
        match &species.evolution_chain_url {
            Some(url) => {
                let root = self.records.evolution_chain(url).await?;
                self.evolution.execute(&root).await
            }
            None => Ok(vec![EvolutionEntry {
                name: species.name.clone(),
                sprite: creature.sprite.clone(),
            }]),
        }
    }

    /// Non-default varieties with their sprites, in the species' order.
    async fn forms(&self, species: &Species) -> Result<Vec<FormEntry>, FetchError> {
        let urls: Vec<String> = species
            .alternate_forms()
            .map(|variety| variety.creature.url.clone())
            .collect();
        let creatures = self.records.creatures_at(&urls).await?;

        Ok(species
            .alternate_forms()
            .zip(creatures)
            .map(|(variety, creature)| FormEntry {
                name: variety.creature.name.clone(),
                sprite: creature.sprite,
            })
            .collect())
    }
}
