//! Type damage relations and weakness derivation

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Damage relations for one elemental type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRelation {
    pub name: String,
    /// Types that deal double damage to this one
    pub double_damage_from: Vec<String>,
}

/// Weaknesses of a type combination.
///
/// Concatenates every relation's `double_damage_from` in the order given and
/// keeps the first occurrence of each name.
pub fn collect_weaknesses<'a, I>(relations: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a TypeRelation>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut weaknesses = Vec::new();
    for relation in relations {
        for name in &relation.double_damage_from {
            if seen.insert(name.as_str()) {
                weaknesses.push(name.clone());
            }
        }
    }
    weaknesses
}
