//! Port traits for infrastructure boundaries.
//!
//! The creature API is the only external system, so there is a single port:
//! anything that can turn a [`ResourceLocator`] into a JSON document.
//! Everything above it (typed parsing, batching, assembly) is concrete.

mod error;
mod resource;

pub use error::FetchError;
pub use resource::{ResourceKind, ResourceLocator, ResourcePort};

#[cfg(test)]
pub use resource::MockResourcePort;
