//! Command registration and lookup.
//!
//! The registry is the hot path of every turn: an exact, case-insensitive
//! scan over registered names and aliases, with no fuzzy logic. "Did you
//! mean" suggestions are a separate, explicitly invoked step that runs
//! only after lookup has already failed.

use delve_core::{Name, Named};

use crate::error::{GameError, GameResult};

/// What a registered command does when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Describe the current location, or a named target in it.
    Look,
    /// Move an item from the current location into the inventory.
    Take,
    /// Move an item from the inventory into the current location.
    Drop,
    /// List carried items.
    Inventory,
    /// Attack a creature at the current location.
    Attack,
    /// Cast a known skill.
    Cast,
    /// Search the wiki.
    Wiki,
    /// Show help for a command, or the command summary.
    Help,
    /// List every registered command.
    Commands,
    /// Show recently issued commands.
    History,
    /// End the session.
    Quit,
}

/// A command's canonical name, aliases, and help text.
///
/// The aliases live on the [`Name`] so descriptors participate in
/// containment matching (for `help` lookups) like any other candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    name: Name,
    help: String,
}

impl CommandDescriptor {
    /// Create a descriptor from a name and its help text.
    pub fn new(name: Name, help: impl Into<String>) -> Self {
        Self {
            name,
            help: help.into(),
        }
    }

    /// The canonical command word.
    pub fn canonical(&self) -> &str {
        self.name.singular()
    }

    /// The help text.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The alias words, in the order they were added.
    pub fn aliases(&self) -> &[String] {
        self.name.aliases()
    }

    /// Whether `word` is this command's name or one of its aliases,
    /// compared case-insensitively.
    pub fn identifies(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.name.forms().any(|form| form.to_lowercase() == word)
    }
}

impl Named for CommandDescriptor {
    fn name(&self) -> &Name {
        &self.name
    }
}

/// A dispatchable command: a descriptor plus the kind tag the session
/// matches on.
#[derive(Debug, Clone)]
pub struct Command {
    /// Dispatch tag.
    pub kind: CommandKind,
    /// Name, aliases, and help text.
    pub descriptor: CommandDescriptor,
}

impl Command {
    /// Create a command.
    pub fn new(kind: CommandKind, name: Name, help: impl Into<String>) -> Self {
        Self {
            kind,
            descriptor: CommandDescriptor::new(name, help),
        }
    }
}

/// An ordered set of commands with mutually unique names and aliases.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command.
    ///
    /// Fails with [`GameError::DuplicateCommand`] when the command's
    /// name or any alias already identifies a registered command,
    /// case-insensitively.
    pub fn register(&mut self, command: Command) -> GameResult<()> {
        for form in command.descriptor.name().forms() {
            if self.lookup(form).is_some() {
                return Err(GameError::DuplicateCommand(form.to_string()));
            }
        }
        self.commands.push(command);
        Ok(())
    }

    /// Find the command identified by `word`, case-insensitively.
    pub fn lookup(&self, word: &str) -> Option<&Command> {
        self.commands
            .iter()
            .find(|command| command.descriptor.identifies(word))
    }

    /// Canonical names of the commands closest to `word` by edit
    /// distance, best first, at most `limit` of them.
    pub fn closest(&self, word: &str, limit: usize) -> GameResult<Vec<String>> {
        let ranked = delve_core::closest(word, self.descriptors(), limit)?;
        Ok(ranked
            .into_iter()
            .map(|(descriptor, _)| descriptor.canonical().to_string())
            .collect())
    }

    /// Iterate over the commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Iterate over the descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().map(|command| &command.descriptor)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The standard command set.
    ///
    /// The words are fixed and mutually disjoint; a unit test re-registers
    /// the whole set through [`CommandRegistry::register`] to keep it that
    /// way.
    pub fn standard() -> Self {
        let commands = vec![
            Command::new(
                CommandKind::Look,
                Name::new("look").with_alias("examine").with_alias("l"),
                "Describe the current location, or something in it.",
            ),
            Command::new(
                CommandKind::Take,
                Name::new("take").with_alias("get").with_alias("pick"),
                "Pick up an item lying at the current location.",
            ),
            Command::new(
                CommandKind::Drop,
                Name::new("drop").with_alias("discard"),
                "Drop a carried item at the current location.",
            ),
            Command::new(
                CommandKind::Inventory,
                Name::new("inventory").with_alias("items").with_alias("i"),
                "List what you are carrying.",
            ),
            Command::new(
                CommandKind::Attack,
                Name::new("attack").with_alias("kill").with_alias("fight"),
                "Attack a creature at the current location.",
            ),
            Command::new(
                CommandKind::Cast,
                Name::new("cast"),
                "Cast one of the skills you know.",
            ),
            Command::new(
                CommandKind::Wiki,
                Name::new("wiki").with_alias("encyclopedia"),
                "Search the wiki, or list every article.",
            ),
            Command::new(
                CommandKind::Help,
                Name::new("help").with_alias("?"),
                "Show help for a command.",
            ),
            Command::new(
                CommandKind::Commands,
                Name::new("commands"),
                "List every command with its help text.",
            ),
            Command::new(
                CommandKind::History,
                Name::new("history"),
                "Show recently issued commands.",
            ),
            Command::new(
                CommandKind::Quit,
                Name::new("quit").with_alias("exit").with_alias("q"),
                "End the session.",
            ),
        ];
        Self { commands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn go_command() -> Command {
        Command::new(
            CommandKind::Look,
            Name::new("go").with_alias("move"),
            "Go somewhere.",
        )
    }

    #[test]
    fn lookup_resolves_name_and_aliases_case_insensitively() {
        let mut registry = CommandRegistry::new();
        registry.register(go_command()).unwrap();

        for word in ["GO", "go", "Move", "MOVE"] {
            let command = registry.lookup(word).unwrap();
            assert_eq!(command.descriptor.canonical(), "go");
        }
        assert!(registry.lookup("run").is_none());
    }

    #[test]
    fn register_rejects_duplicate_name() {
        let mut registry = CommandRegistry::new();
        registry.register(go_command()).unwrap();

        let duplicate = Command::new(CommandKind::Quit, Name::new("GO"), "Other.");
        assert!(matches!(
            registry.register(duplicate),
            Err(GameError::DuplicateCommand(word)) if word == "GO"
        ));
    }

    #[test]
    fn register_rejects_alias_colliding_with_name() {
        let mut registry = CommandRegistry::new();
        registry.register(go_command()).unwrap();

        let colliding = Command::new(
            CommandKind::Quit,
            Name::new("walk").with_alias("move"),
            "Other.",
        );
        assert!(registry.register(colliding).is_err());
        // The rejected command must not be partially registered.
        assert!(registry.lookup("walk").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn standard_set_registers_cleanly() {
        let mut fresh = CommandRegistry::new();
        for command in CommandRegistry::standard().iter() {
            fresh.register(command.clone()).unwrap();
        }
        assert_eq!(fresh.len(), CommandRegistry::standard().len());
    }

    #[test]
    fn standard_set_has_the_expected_words() {
        let registry = CommandRegistry::standard();
        for word in ["look", "take", "drop", "inventory", "attack", "cast", "wiki", "help", "commands", "history", "quit"] {
            assert!(registry.lookup(word).is_some(), "missing command: {word}");
        }
    }

    #[test]
    fn closest_suggests_similar_command_words() {
        let registry = CommandRegistry::standard();
        let suggestions = registry.closest("atack", 1).unwrap();
        assert_eq!(suggestions, ["attack"]);
    }
}
