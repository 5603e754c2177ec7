//! Entities fetched from the creature API.
//!
//! All entities are read-only snapshots: they are built once from a fetched
//! document and never mutated afterwards.

mod creature;
mod evolution;
mod species;
mod type_relation;

pub use creature::{BaseStat, Creature, ResourceRef, TypeSlot};
pub use evolution::{BranchPolicy, EvolutionNode, EvolutionStages};
pub use species::{FlavorTextEntry, Species, Variety};
pub use type_relation::{collect_weaknesses, TypeRelation};
