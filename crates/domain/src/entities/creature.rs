//! Creature entity - a single record from the catalog

use serde::{Deserialize, Serialize};

/// A named reference to another remote resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

impl ResourceRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One of a creature's elemental types, with its display slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSlot {
    pub slot: u8,
    pub kind: ResourceRef,
}

/// A base stat in source order (e.g. "hp", "attack", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

/// A creature record.
///
/// `stats` keeps the order the API returned. Stat bars and radar vertices are
/// both driven from this order, so it must never be sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: u32,
    /// Unique lowercase name
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<BaseStat>,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
    /// Height in decimetres
    pub height_dm: u32,
    /// Weight in hectograms
    pub weight_hg: u32,
    /// Front-facing sprite; the API leaves some forms without one
    pub sprite: Option<String>,
    pub species: ResourceRef,
}

impl Creature {
    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }

    /// Type references in slot order, for resolving damage relations.
    pub fn type_refs(&self) -> Vec<ResourceRef> {
        self.types.iter().map(|t| t.kind.clone()).collect()
    }

    /// The type in the first slot, if any.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.kind.name.as_str())
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.kind.name == type_name)
    }

    /// Stat values in source order.
    pub fn stat_values(&self) -> Vec<f64> {
        self.stats.iter().map(|s| f64::from(s.value)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venusaur() -> Creature {
        Creature {
            id: 3,
            name: "venusaur".into(),
            types: vec![
                TypeSlot {
                    slot: 1,
                    kind: ResourceRef::new("grass", "https://api.test/type/12/"),
                },
                TypeSlot {
                    slot: 2,
                    kind: ResourceRef::new("poison", "https://api.test/type/4/"),
                },
            ],
            stats: vec![
                BaseStat {
                    name: "hp".into(),
                    value: 80,
                },
                BaseStat {
                    name: "attack".into(),
                    value: 82,
                },
            ],
            abilities: vec!["overgrow".into()],
            moves: vec![],
            height_dm: 20,
            weight_hg: 1000,
            sprite: None,
            species: ResourceRef::new("venusaur", "https://api.test/pokemon-species/3/"),
        }
    }

    #[test]
    fn test_type_accessors_follow_slot_order() {
        let creature = venusaur();
        assert_eq!(creature.type_names(), vec!["grass", "poison"]);
        assert_eq!(creature.primary_type(), Some("grass"));
        assert!(creature.has_type("poison"));
        assert!(!creature.has_type("fire"));
    }

    #[test]
    fn test_stat_values_keep_source_order() {
        assert_eq!(venusaur().stat_values(), vec![80.0, 82.0]);
    }

    #[test]
    fn test_primary_type_of_untyped_record() {
        let mut creature = venusaur();
        creature.types.clear();
        assert_eq!(creature.primary_type(), None);
    }
}
