//! Display names for everything a player query can refer to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The display identity of a candidate.
///
/// A name has a singular form, an optional plural form, and zero or more
/// aliases. The singular form is never blank. All forms participate in
/// matching; the singular form is what gets displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    singular: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plural: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
}

impl Name {
    /// Create a name from its singular form.
    ///
    /// # Panics
    ///
    /// Panics if the singular form is blank.
    pub fn new(singular: impl Into<String>) -> Self {
        let singular = singular.into();
        assert!(
            !singular.trim().is_empty(),
            "the singular form of a name must not be blank"
        );
        Self {
            singular,
            plural: None,
            aliases: Vec::new(),
        }
    }

    /// Set the plural form.
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// The singular form.
    pub fn singular(&self) -> &str {
        &self.singular
    }

    /// The plural form, if one was set.
    pub fn plural(&self) -> Option<&str> {
        self.plural.as_deref()
    }

    /// The aliases, in the order they were added.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Iterate over every form: singular, then plural, then aliases.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.singular.as_str())
            .chain(self.plural.as_deref())
            .chain(self.aliases.iter().map(String::as_str))
    }

    /// Render this name with a numeric quantifier, picking the plural
    /// form for counts other than one when it is available.
    pub fn quantified(&self, count: usize) -> String {
        if count == 1 {
            format!("1 {}", self.singular)
        } else {
            format!("{count} {}", self.plural.as_deref().unwrap_or(&self.singular))
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singular)
    }
}

/// Capability trait for anything a player query can select.
///
/// Commands, items, creatures, articles, and skills all expose a [`Name`]
/// through this trait; the matcher works against the trait so the kinds
/// stay independent types with no shared base.
pub trait Named {
    /// The candidate's display name.
    fn name(&self) -> &Name;
}

impl Named for Name {
    fn name(&self) -> &Name {
        self
    }
}
