//! Evolution chain walking.

use std::sync::Arc;

use dexview_domain::{BranchPolicy, EvolutionEntry, EvolutionNode};

use crate::entities::Records;
use crate::infrastructure::ports::FetchError;

/// Turn an evolution tree into the ordered strip shown on the detail view.
pub struct WalkEvolutionChain {
    records: Arc<Records>,
    policy: BranchPolicy,
}

impl WalkEvolutionChain {
    pub fn new(records: Arc<Records>, policy: BranchPolicy) -> Self {
        Self { records, policy }
    }

    /// Emit each stage selected by the branch policy, paired with the sprite
    /// of the creature sharing the stage's species name.
    ///
    /// Stages are fetched one after another. A missing creature fails the
    /// walk instead of truncating it.
    pub async fn execute(&self, root: &EvolutionNode) -> Result<Vec<EvolutionEntry>, FetchError> {
        let mut entries = Vec::new();
        for stage in root.stages(self.policy) {
            let creature = self.records.creature(&stage.species_name).await?;
            entries.push(EvolutionEntry {
                name: stage.species_name.clone(),
                sprite: creature.sprite,
            });
        }

        tracing::debug!(
            root = %root.species_name,
            stages = entries.len(),
            "Walked evolution chain"
        );
        Ok(entries)
    }
}
