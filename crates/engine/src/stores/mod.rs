//! In-memory state storage modules.
//!
//! Stores hold per-screen runtime state:
//! - `DetailStore` - Latest detail request and its outcome
//! - `CatalogStore` - Loaded records and the interactive query

pub mod catalog;
pub mod detail;
pub mod tickets;

// Re-export store types
pub use catalog::{CatalogSnapshot, CatalogStore};
pub use detail::{DetailState, DetailStore};
pub use tickets::{RequestTracker, StaleResultDiscard, Ticket};
