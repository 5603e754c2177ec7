//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod catalog;
pub mod detail;

pub use catalog::{CatalogLoadError, CatalogPhase, CatalogUseCases, LoadCatalog};
pub use detail::{AssembleDetail, DeriveWeaknesses, DetailUseCases, WalkEvolutionChain};
