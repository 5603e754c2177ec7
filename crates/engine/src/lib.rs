//! Dexview Engine library.
//!
//! Fetches creature records from the remote API and assembles the catalog
//! and detail view models.
//!
//! ## Structure
//!
//! - `entities/` - Typed record fetching over the resource port
//! - `use_cases/` - Weakness, evolution, detail and catalog orchestration
//! - `stores/` - Per-screen state with stale-result discarding
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures: in-memory API and document builders.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
