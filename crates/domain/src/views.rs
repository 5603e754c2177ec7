//! View models handed to the presentation layer.
//!
//! Built once from fetched entities and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::entities::{Creature, Species};
use crate::geometry::{polygon_points, project_stats, Point, RadarConfig};
use crate::value_objects::{Height, TypeColor, Weight};

/// Number of moves shown on the detail view.
pub const MOVE_PREVIEW_LIMIT: usize = 8;

/// A catalog card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemView {
    pub id: u32,
    pub name: String,
    pub sprite: Option<String>,
    pub types: Vec<String>,
    pub color: TypeColor,
    pub color_class: String,
}

impl From<&Creature> for CatalogItemView {
    fn from(creature: &Creature) -> Self {
        let color = TypeColor::for_type(creature.primary_type());
        Self {
            id: creature.id,
            name: creature.name.clone(),
            sprite: creature.sprite.clone(),
            types: creature.type_names(),
            color,
            color_class: color.class_name().to_string(),
        }
    }
}

/// One stage of the evolution strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionEntry {
    pub name: String,
    pub sprite: Option<String>,
}

/// An alternate (non-default) form of the species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub name: String,
    pub sprite: Option<String>,
}

/// A stat bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub name: String,
    pub value: u32,
    pub bar_percent: f64,
}

/// Radar chart vertices, in the same order as the stat bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatChart {
    pub points: Vec<Point>,
    /// SVG polygon `points` attribute
    pub polygon: String,
}

/// Everything the detail screen shows for one creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub id: u32,
    pub name: String,
    pub sprite: Option<String>,
    pub flavor_text: Option<String>,
    pub height: String,
    pub weight: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub egg_groups: Vec<String>,
    pub moves: Vec<String>,
    pub weaknesses: Vec<String>,
    pub evolutions: Vec<EvolutionEntry>,
    pub forms: Vec<FormEntry>,
    pub stats: Vec<StatLine>,
    pub chart: StatChart,
}

impl DetailView {
    /// Combine fetched entities with the derived lists.
    pub fn compose(
        creature: &Creature,
        species: &Species,
        weaknesses: Vec<String>,
        evolutions: Vec<EvolutionEntry>,
        forms: Vec<FormEntry>,
        radar: &RadarConfig,
    ) -> Self {
        let stats = creature
            .stats
            .iter()
            .map(|stat| StatLine {
                name: stat.name.clone(),
                value: stat.value,
                bar_percent: radar.bar_percent(f64::from(stat.value)),
            })
            .collect();
        let points = project_stats(&creature.stat_values(), radar);
        let polygon = polygon_points(&points);

        Self {
            id: creature.id,
            name: creature.name.clone(),
            sprite: creature.sprite.clone(),
            flavor_text: species.english_flavor_text(),
            height: Height::from_decimetres(creature.height_dm)
                .to_imperial()
                .to_string(),
            weight: Weight::from_hectograms(creature.weight_hg).to_string(),
            types: creature.type_names(),
            abilities: creature.abilities.clone(),
            egg_groups: species.egg_groups.clone(),
            moves: creature
                .moves
                .iter()
                .take(MOVE_PREVIEW_LIMIT)
                .cloned()
                .collect(),
            weaknesses,
            evolutions,
            forms,
            stats,
            chart: StatChart { points, polygon },
        }
    }
}
