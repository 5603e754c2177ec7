//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on ports and provide the building blocks for use cases.

pub mod records;

pub use records::Records;
