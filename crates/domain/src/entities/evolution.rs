//! Evolution chain entity
//!
//! The API models evolution as a tree (some species branch into several
//! evolutions). The viewer only follows one child per stage, so the tree is
//! read as a chain and the other branches are dropped.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One stage of an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionNode {
    pub species_name: String,
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(species_name: impl Into<String>) -> Self {
        Self {
            species_name: species_name.into(),
            evolves_to: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: EvolutionNode) -> Self {
        self.evolves_to.push(child);
        self
    }

    /// Walk the stages from this node, choosing children with `policy`.
    ///
    /// Always yields at least this node.
    pub fn stages(&self, policy: BranchPolicy) -> EvolutionStages<'_> {
        EvolutionStages {
            next: Some(self),
            policy,
        }
    }
}

/// How a walker picks the next stage when a node has several children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchPolicy {
    /// Follow the first listed child; sibling branches are dropped.
    #[default]
    FirstChild,
}

impl BranchPolicy {
    pub fn next_stage<'a>(&self, node: &'a EvolutionNode) -> Option<&'a EvolutionNode> {
        match self {
            Self::FirstChild => node.evolves_to.first(),
        }
    }
}

impl FromStr for BranchPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_child" | "first-child" => Ok(Self::FirstChild),
            other => Err(DomainError::parse(format!(
                "unknown branch policy '{other}'"
            ))),
        }
    }
}

/// Iterator over the stages selected by a [`BranchPolicy`].
///
/// The source graph is a tree, so the walk always terminates.
#[derive(Debug, Clone)]
pub struct EvolutionStages<'a> {
    next: Option<&'a EvolutionNode>,
    policy: BranchPolicy,
}

impl<'a> Iterator for EvolutionStages<'a> {
    type Item = &'a EvolutionNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.policy.next_stage(current);
        Some(current)
    }
}
