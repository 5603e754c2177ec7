//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod pokeapi;
pub mod ports;
pub mod settings;
