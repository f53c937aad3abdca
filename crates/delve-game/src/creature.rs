//! Creatures and the locations that hold them.

use delve_core::{Matches, Name, Named, find_matches};
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// A creature that can be targeted at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Display name.
    pub name: Name,
    /// Flavor text shown when the creature is examined.
    pub description: String,
    /// Current health.
    pub health: u32,
}

impl Creature {
    /// Create a creature.
    pub fn new(name: Name, description: impl Into<String>, health: u32) -> Self {
        Self {
            name,
            description: description.into(),
            health,
        }
    }
}

impl Named for Creature {
    fn name(&self) -> &Name {
        &self.name
    }
}

/// A place the hero can stand in, holding creatures and loose items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Display name.
    pub name: Name,
    /// Flavor text shown on look.
    pub description: String,
    /// Creatures present, in spawn order.
    pub creatures: Vec<Creature>,
    /// Items lying around, in drop order.
    pub items: Vec<Item>,
}

impl Location {
    /// Create an empty location.
    pub fn new(name: Name, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            creatures: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Add a creature.
    pub fn with_creature(mut self, creature: Creature) -> Self {
        self.creatures.push(creature);
        self
    }

    /// Add a loose item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// All creatures here the query tokens could refer to.
    pub fn find_creature(&self, tokens: &[String]) -> Matches<'_, Creature> {
        find_matches(&self.creatures, tokens)
    }

    /// All loose items here the query tokens could refer to.
    pub fn find_item(&self, tokens: &[String]) -> Matches<'_, Item> {
        find_matches(&self.items, tokens)
    }

    /// Remove the first loose item equal to `item`, returning it.
    pub fn take_item(&mut self, item: &Item) -> Option<Item> {
        let index = self.items.iter().position(|loose| loose == item)?;
        Some(self.items.remove(index))
    }
}
