//! Catalog card color classes keyed by primary type.

use serde::{Deserialize, Serialize};

/// Background class for a catalog card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeColor {
    Grass,
    Fire,
    Water,
    Bug,
    Poison,
    Flying,
    Normal,
    Electric,
    Ground,
    Fairy,
    Psychic,
    Rock,
    Ghost,
    Dark,
    Steel,
    Ice,
    Dragon,
    Fighting,
    /// Untyped records and types without a dedicated class
    Default,
}

impl TypeColor {
    pub fn for_type(type_name: Option<&str>) -> Self {
        match type_name {
            Some("grass") => Self::Grass,
            Some("fire") => Self::Fire,
            Some("water") => Self::Water,
            Some("bug") => Self::Bug,
            Some("poison") => Self::Poison,
            Some("flying") => Self::Flying,
            Some("normal") => Self::Normal,
            Some("electric") => Self::Electric,
            Some("ground") => Self::Ground,
            Some("fairy") => Self::Fairy,
            Some("psychic") => Self::Psychic,
            Some("rock") => Self::Rock,
            Some("ghost") => Self::Ghost,
            Some("dark") => Self::Dark,
            Some("steel") => Self::Steel,
            Some("ice") => Self::Ice,
            Some("dragon") => Self::Dragon,
            Some("fighting") => Self::Fighting,
            _ => Self::Default,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Grass => "bg-green-500",
            Self::Fire => "bg-red-500",
            Self::Water => "bg-blue-500",
            Self::Bug => "bg-lime-500",
            Self::Poison => "bg-purple-500",
            Self::Flying => "bg-indigo-500",
            Self::Normal => "bg-gray-400",
            Self::Electric => "bg-yellow-500",
            Self::Ground => "bg-yellow-600",
            Self::Fairy => "bg-pink-500",
            Self::Psychic => "bg-pink-600",
            Self::Rock => "bg-yellow-700",
            Self::Ghost => "bg-indigo-700",
            Self::Dark => "bg-gray-700",
            Self::Steel => "bg-gray-500",
            Self::Ice => "bg-cyan-500",
            Self::Dragon => "bg-purple-600",
            Self::Fighting => "bg-red-600",
            Self::Default => "bg-gray-300",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_type() {
        assert_eq!(TypeColor::for_type(Some("fire")), TypeColor::Fire);
        assert_eq!(TypeColor::Fire.class_name(), "bg-red-500");
    }

    #[test]
    fn test_unknown_and_missing_types_fall_back() {
        assert_eq!(TypeColor::for_type(Some("stellar")), TypeColor::Default);
        assert_eq!(TypeColor::for_type(None).class_name(), "bg-gray-300");
    }
}
