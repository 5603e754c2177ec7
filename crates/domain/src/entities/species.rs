//! Species entity - taxonomy shared by a creature's forms

use serde::{Deserialize, Serialize};

use super::creature::ResourceRef;
use crate::value_objects::normalize_flavor_text;

/// Language code used for flavor text selection.
pub const DISPLAY_LANGUAGE: &str = "en";

/// A localized pokedex-style description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorTextEntry {
    pub text: String,
    pub language: String,
}

/// A form of the species, pointing at its own creature record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variety {
    pub is_default: bool,
    pub creature: ResourceRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub name: String,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub egg_groups: Vec<String>,
    /// Absent for a handful of species the API never linked to a chain
    pub evolution_chain_url: Option<String>,
    pub varieties: Vec<Variety>,
}

impl Species {
    /// First English flavor text with line breaks and whitespace runs
    /// collapsed to single spaces.
    pub fn english_flavor_text(&self) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language == DISPLAY_LANGUAGE)
            .map(|entry| normalize_flavor_text(&entry.text))
    }

    /// Non-default varieties, in source order.
    pub fn alternate_forms(&self) -> impl Iterator<Item = &Variety> {
        self.varieties.iter().filter(|v| !v.is_default)
    }
}
