//! Skills and the hero's skillbook.

use delve_core::{Matches, Name, Named, find_matches};
use serde::{Deserialize, Serialize};

/// A castable skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name.
    pub name: Name,
    /// What casting it does, in flavor terms.
    pub description: String,
}

impl Skill {
    /// Create a skill.
    pub fn new(name: Name, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
        }
    }
}

impl Named for Skill {
    fn name(&self) -> &Name {
        &self.name
    }
}

/// The ordered set of skills the hero knows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skillbook {
    skills: Vec<Skill>,
}

impl Skillbook {
    /// Create an empty skillbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn a skill, appending it to the book.
    pub fn learn(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    /// The known skills, in learning order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Whether no skill is known.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// All known skills the query tokens could refer to.
    pub fn find(&self, tokens: &[String]) -> Matches<'_, Skill> {
        find_matches(&self.skills, tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_lookup_by_word() {
        let mut book = Skillbook::new();
        book.learn(Skill::new(Name::new("Fireball"), "A burst of flame."));
        book.learn(Skill::new(
            Name::new("Healing Word").with_alias("heal"),
            "Mends small wounds.",
        ));

        let tokens = vec!["heal".to_string()];
        let matches = book.find(&tokens);
        assert_eq!(matches.names(), ["Healing Word"]);
    }
}
