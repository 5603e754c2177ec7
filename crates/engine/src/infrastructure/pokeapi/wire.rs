//! PokeAPI v2 document shapes.
//!
//! Only the fields the viewer reads are declared; serde ignores the rest.
//! Each document converts into its domain entity.

use serde::Deserialize;

use dexview_domain::{
    BaseStat, Creature, EvolutionNode, FlavorTextEntry, ResourceRef, Species, TypeRelation,
    TypeSlot, Variety,
};

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl From<NamedResource> for ResourceRef {
    fn from(value: NamedResource) -> Self {
        ResourceRef::new(value.name, value.url)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

// =============================================================================
// /pokemon/{name}
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreatureDocument {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlotDocument>,
    #[serde(default)]
    pub stats: Vec<StatDocument>,
    #[serde(default)]
    pub abilities: Vec<AbilityDocument>,
    #[serde(default)]
    pub moves: Vec<MoveDocument>,
    pub height: u32,
    pub weight: u32,
    pub sprites: SpritesDocument,
    pub species: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlotDocument {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatDocument {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilityDocument {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveDocument {
    #[serde(rename = "move")]
    pub entry: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpritesDocument {
    pub front_default: Option<String>,
}

impl From<CreatureDocument> for Creature {
    fn from(doc: CreatureDocument) -> Self {
        Creature {
            id: doc.id,
            name: doc.name,
            types: doc
                .types
                .into_iter()
                .map(|t| TypeSlot {
                    slot: t.slot,
                    kind: t.kind.into(),
                })
                .collect(),
            stats: doc
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            abilities: doc.abilities.into_iter().map(|a| a.ability.name).collect(),
            moves: doc.moves.into_iter().map(|m| m.entry.name).collect(),
            height_dm: doc.height,
            weight_hg: doc.weight,
            sprite: doc.sprites.front_default,
            species: doc.species.into(),
        }
    }
}

// =============================================================================
// /pokemon?limit=N
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct IndexDocument {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl IndexDocument {
    pub fn into_refs(self) -> Vec<ResourceRef> {
        self.results.into_iter().map(ResourceRef::from).collect()
    }
}

// =============================================================================
// /pokemon-species/{id}
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesDocument {
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextDocument>,
    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,
    pub evolution_chain: Option<UrlResource>,
    #[serde(default)]
    pub varieties: Vec<VarietyDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextDocument {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VarietyDocument {
    pub is_default: bool,
    pub pokemon: NamedResource,
}

impl From<SpeciesDocument> for Species {
    fn from(doc: SpeciesDocument) -> Self {
        Species {
            name: doc.name,
            flavor_text_entries: doc
                .flavor_text_entries
                .into_iter()
                .map(|f| FlavorTextEntry {
                    text: f.flavor_text,
                    language: f.language.name,
                })
                .collect(),
            egg_groups: doc.egg_groups.into_iter().map(|g| g.name).collect(),
            evolution_chain_url: doc.evolution_chain.map(|c| c.url),
            varieties: doc
                .varieties
                .into_iter()
                .map(|v| Variety {
                    is_default: v.is_default,
                    creature: v.pokemon.into(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// /type/{id}
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TypeDocument {
    pub name: String,
    pub damage_relations: DamageRelationsDocument,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DamageRelationsDocument {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
}

impl From<TypeDocument> for TypeRelation {
    fn from(doc: TypeDocument) -> Self {
        TypeRelation {
            name: doc.name,
            double_damage_from: doc
                .damage_relations
                .double_damage_from
                .into_iter()
                .map(|t| t.name)
                .collect(),
        }
    }
}

// =============================================================================
// /evolution-chain/{id}
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainDocument {
    pub chain: ChainLinkDocument,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainLinkDocument {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLinkDocument>,
}

impl From<ChainLinkDocument> for EvolutionNode {
    fn from(link: ChainLinkDocument) -> Self {
        EvolutionNode {
            species_name: link.species.name,
            evolves_to: link.evolves_to.into_iter().map(EvolutionNode::from).collect(),
        }
    }
}

impl From<EvolutionChainDocument> for EvolutionNode {
    fn from(doc: EvolutionChainDocument) -> Self {
        doc.chain.into()
    }
}
