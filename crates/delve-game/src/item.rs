//! Items and the hero's inventory.

use delve_core::{Matches, Name, Named, find_matches};
use serde::{Deserialize, Serialize};

use crate::counter::CounterMap;
use crate::text;

/// A carryable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: Name,
    /// Flavor text shown when the item is examined.
    pub description: String,
}

impl Item {
    /// Create an item.
    pub fn new(name: Name, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
        }
    }
}

impl Named for Item {
    fn name(&self) -> &Name {
        &self.name
    }
}

/// The ordered collection of items a creature carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the end.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item equal to `item`, returning it.
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        let index = self.items.iter().position(|carried| carried == item)?;
        Some(self.items.remove(index))
    }

    /// The carried items, in carry order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All carried items the query tokens could refer to, in carry order.
    pub fn find(&self, tokens: &[String]) -> Matches<'_, Item> {
        find_matches(&self.items, tokens)
    }

    /// Human-readable enumeration of the carried items, quantities folded
    /// ("2 Apples and 1 Rusty Sword").
    pub fn enumerate(&self) -> String {
        enumerate_items(&self.items)
    }
}

/// Enumerate items with quantified names, folding equal names together.
pub fn enumerate_items(items: &[Item]) -> String {
    let mut occurrences: CounterMap<&Name> = CounterMap::new();
    for item in items {
        occurrences.increment(&item.name, 1);
    }
    let quantified: Vec<String> = occurrences
        .iter()
        .map(|(name, count)| name.quantified(count))
        .collect();
    text::enumerate(&quantified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Item {
        Item::new(Name::new("Apple").with_plural("Apples"), "Crisp and red.")
    }

    fn sword() -> Item {
        Item::new(Name::new("Rusty Sword").with_alias("sword"), "Seen better days.")
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| (*word).to_string()).collect()
    }

    #[test]
    fn find_matches_by_name_word() {
        let mut inventory = Inventory::new();
        inventory.add(apple());
        inventory.add(sword());

        let matches = inventory.find(&tokens(&["rusty"]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.names(), ["Rusty Sword"]);
    }

    #[test]
    fn find_matches_by_alias() {
        let mut inventory = Inventory::new();
        inventory.add(sword());
        assert_eq!(inventory.find(&tokens(&["sword"])).len(), 1);
    }

    #[test]
    fn remove_takes_one_of_equal_items() {
        let mut inventory = Inventory::new();
        inventory.add(apple());
        inventory.add(apple());

        let removed = inventory.remove(&apple()).unwrap();
        assert_eq!(removed.name.singular(), "Apple");
        assert_eq!(inventory.len(), 1);
        assert!(inventory.remove(&sword()).is_none());
    }

    #[test]
    fn enumerate_folds_quantities() {
        let mut inventory = Inventory::new();
        inventory.add(apple());
        inventory.add(sword());
        inventory.add(apple());

        assert_eq!(inventory.enumerate(), "2 Apples and 1 Rusty Sword");
    }

    #[test]
    fn enumerate_empty_inventory() {
        assert_eq!(Inventory::new().enumerate(), "");
    }
}
