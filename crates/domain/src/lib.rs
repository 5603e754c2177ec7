//! Dexview domain.
//!
//! Creature entities as fetched from the API, plus every derivation that
//! needs no I/O: weakness deduplication, evolution-chain linearisation,
//! radar geometry, catalog filtering/pagination and unit conversions.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod value_objects;
pub mod views;

pub use catalog::{
    page_count, CatalogPage, CatalogQuery, CatalogState, CATEGORY_OPTIONS, DEFAULT_PAGE_SIZE,
};
pub use entities::{
    collect_weaknesses, BaseStat, BranchPolicy, Creature, EvolutionNode, EvolutionStages,
    FlavorTextEntry, ResourceRef, Species, TypeRelation, TypeSlot, Variety,
};
pub use error::DomainError;
pub use geometry::{
    polygon_points, project_stats, OverflowPolicy, Point, RadarConfig, DEFAULT_CENTER,
    DEFAULT_MAX_RADIUS, DEFAULT_MAX_SCALE,
};
pub use value_objects::{normalize_flavor_text, Height, ImperialHeight, TypeColor, Weight};
pub use views::{
    CatalogItemView, DetailView, EvolutionEntry, FormEntry, StatChart, StatLine,
    MOVE_PREVIEW_LIMIT,
};
