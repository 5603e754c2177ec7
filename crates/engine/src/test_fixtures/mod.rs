//! Test fixtures: an in-memory creature API and JSON document builders.
//!
//! Documents are keyed by the URL a real client would request, so the same
//! locators used in production resolve against [`BASE_URL`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{creature_json, FixturePort};
//!
//! let port = FixturePort::new().with_creature(creature_json(25, "pikachu", &["electric"]));
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::infrastructure::ports::{FetchError, ResourceLocator, ResourcePort};

/// Base URL the fixture API pretends to serve.
pub const BASE_URL: &str = "https://pokeapi.test/api/v2";

/// Six base stats in canonical order: hp, attack, defense, special-attack,
/// special-defense, speed.
pub const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

// =============================================================================
// Fixture port
// =============================================================================

/// In-memory [`ResourcePort`] that serves registered documents and answers
/// anything else with NotFound. Every request is recorded.
#[derive(Default)]
pub struct FixturePort {
    documents: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl FixturePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn creature_url(name: &str) -> String {
        format!("{BASE_URL}/pokemon/{name}/")
    }

    pub fn species_url(name: &str) -> String {
        format!("{BASE_URL}/pokemon-species/{name}/")
    }

    pub fn type_url(name: &str) -> String {
        format!("{BASE_URL}/type/{name}/")
    }

    pub fn chain_url(id: u32) -> String {
        format!("{BASE_URL}/evolution-chain/{id}/")
    }

    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.documents.insert(url.into(), document);
        self
    }

    /// Register a creature under its name, its id and its canonical URL.
    pub fn with_creature(self, document: Value) -> Self {
        let name = document["name"].as_str().unwrap_or_default().to_string();
        let id = document["id"].to_string();
        self.with_document(format!("{BASE_URL}/pokemon/{name}"), document.clone())
            .with_document(format!("{BASE_URL}/pokemon/{id}"), document.clone())
            .with_document(Self::creature_url(&name), document)
    }

    pub fn with_species(self, document: Value) -> Self {
        let name = document["name"].as_str().unwrap_or_default().to_string();
        self.with_document(Self::species_url(&name), document)
    }

    pub fn with_type(self, document: Value) -> Self {
        let name = document["name"].as_str().unwrap_or_default().to_string();
        self.with_document(Self::type_url(&name), document)
    }

    pub fn with_chain(self, id: u32, document: Value) -> Self {
        self.with_document(Self::chain_url(id), document)
    }

    /// Register the index page returned for `limit`.
    pub fn with_index(self, limit: usize, names: &[&str]) -> Self {
        self.with_document(
            ResourceLocator::index(limit).resolve(BASE_URL),
            index_json(names),
        )
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ResourcePort for FixturePort {
    async fn fetch(&self, locator: &ResourceLocator) -> Result<Value, FetchError> {
        let url = locator.resolve(BASE_URL);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.clone());
        }
        self.documents
            .get(&url)
            .cloned()
            .ok_or_else(|| FetchError::not_found(locator.kind(), url))
    }
}

// =============================================================================
// Document builders
// =============================================================================

fn named(name: &str, url: String) -> Value {
    json!({ "name": name, "url": url })
}

/// A creature document with fixed stats (45, 49, 49, 65, 65, 45), two
/// abilities, ten moves and a sprite derived from the id.
pub fn creature_json(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": named(t, FixturePort::type_url(t)) }))
        .collect();
    let stats: Vec<Value> = STAT_NAMES
        .iter()
        .zip([45, 49, 49, 65, 65, 45])
        .map(|(stat, value)| {
            json!({
                "base_stat": value,
                "effort": 0,
                "stat": named(stat, format!("{BASE_URL}/stat/{stat}/")),
            })
        })
        .collect();
    let moves: Vec<Value> = (1..=10)
        .map(|i| json!({ "move": named(&format!("move-{i}"), format!("{BASE_URL}/move/{i}/")) }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "types": types,
        "stats": stats,
        "abilities": [
            { "ability": named("overgrow", format!("{BASE_URL}/ability/65/")), "is_hidden": false },
            {
                "ability": named("chlorophyll", format!("{BASE_URL}/ability/34/")),
                "is_hidden": true
            },
        ],
        "moves": moves,
        "sprites": { "front_default": format!("https://img.test/{id}.png") },
        "species": named(name, FixturePort::species_url(name)),
    })
}

/// A species document. `varieties` lists `(creature name, is_default)`.
pub fn species_json(name: &str, chain_id: Option<u32>, varieties: &[(&str, bool)]) -> Value {
    let varieties: Vec<Value> = varieties
        .iter()
        .map(|(variety, is_default)| {
            json!({
                "is_default": is_default,
                "pokemon": named(variety, FixturePort::creature_url(variety)),
            })
        })
        .collect();

    json!({
        "name": name,
        "flavor_text_entries": [
            {
                "flavor_text": "Ne se\nvoit pas.",
                "language": named("fr", format!("{BASE_URL}/language/5/")),
            },
            {
                "flavor_text": format!("A {name}\nseen in the\u{c}wild."),
                "language": named("en", format!("{BASE_URL}/language/9/")),
            },
        ],
        "egg_groups": [named("monster", format!("{BASE_URL}/egg-group/1/"))],
        "evolution_chain": chain_id.map(|id| json!({ "url": FixturePort::chain_url(id) })),
        "varieties": varieties,
    })
}

pub fn type_json(name: &str, double_damage_from: &[&str]) -> Value {
    let from: Vec<Value> = double_damage_from
        .iter()
        .map(|t| named(t, FixturePort::type_url(t)))
        .collect();
    json!({
        "name": name,
        "damage_relations": {
            "double_damage_from": from,
            "half_damage_from": [],
            "no_damage_from": [],
        },
    })
}

/// One link of an evolution chain.
pub fn chain_link(species: &str, evolves_to: Vec<Value>) -> Value {
    json!({
        "species": named(species, FixturePort::species_url(species)),
        "evolves_to": evolves_to,
    })
}

/// A linear chain through `species`, first to last.
pub fn linear_chain_json(species: &[&str]) -> Value {
    let chain = species
        .iter()
        .rev()
        .fold(None, |child: Option<Value>, name| {
            Some(chain_link(name, child.into_iter().collect()))
        })
        .unwrap_or(Value::Null);
    json!({ "chain": chain })
}

pub fn index_json(names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| named(name, FixturePort::creature_url(name)))
        .collect();
    json!({ "count": names.len(), "results": results })
}
