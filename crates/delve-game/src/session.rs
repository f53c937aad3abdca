//! One interactive game session.

use delve_core::{PlayerInput, Resolution};

use crate::command::{CommandKind, CommandRegistry};
use crate::creature::{Creature, Location};
use crate::demo;
use crate::error::GameResult;
use crate::help;
use crate::history::CommandHistory;
use crate::item::{self, Inventory, Item};
use crate::skill::Skillbook;
use crate::text;
use crate::turn::{TurnOutcome, evaluate};
use crate::wiki::Wiki;

/// Mutable world state a session acts on.
#[derive(Debug)]
pub struct GameState {
    /// Where the hero stands.
    pub location: Location,
    /// What the hero carries.
    pub inventory: Inventory,
    /// Skills the hero knows.
    pub skills: Skillbook,
    /// The consultable wiki.
    pub wiki: Wiki,
    /// Lines issued so far.
    pub history: CommandHistory,
}

impl GameState {
    /// Create state with an empty inventory, skillbook, and history.
    pub fn new(location: Location, wiki: Wiki) -> Self {
        Self {
            location,
            inventory: Inventory::new(),
            skills: Skillbook::new(),
            wiki,
            history: CommandHistory::new(),
        }
    }
}

/// An interactive session: a command registry plus the state it drives.
///
/// The registry is constructed and owned explicitly, so tests can run
/// sessions over reduced or custom command sets without any shared
/// global state.
#[derive(Debug)]
pub struct GameSession {
    registry: CommandRegistry,
    state: GameState,
}

impl GameSession {
    /// Create a session over the standard command set.
    pub fn new(state: GameState) -> Self {
        Self::with_registry(CommandRegistry::standard(), state)
    }

    /// Create a session with an explicit registry.
    pub fn with_registry(registry: CommandRegistry, state: GameState) -> Self {
        Self { registry, state }
    }

    /// A session in the demo world shipped with the game.
    pub fn demo() -> GameResult<Self> {
        Ok(Self::new(demo::demo_state()?))
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Process one raw input line and produce the reply to print.
    ///
    /// Invalid input (empty or over-length) fails before anything else
    /// runs: it is never recorded in the history and advances nothing,
    /// a no-op turn. An unrecognized verb earns a "did you mean" reply.
    pub fn process(&mut self, line: &str) -> GameResult<String> {
        let input = PlayerInput::parse(line)?;
        match evaluate(&self.registry, &input)? {
            TurnOutcome::Dispatch { kind, arguments } => {
                self.state.history.record(input.raw());
                Ok(self.execute(kind, &arguments))
            }
            TurnOutcome::UnknownCommand { verb, suggestions } => {
                Ok(unknown_command_reply(&verb, &suggestions))
            }
        }
    }

    /// Run one dispatched command.
    fn execute(&mut self, kind: CommandKind, arguments: &[String]) -> String {
        match kind {
            CommandKind::Look => self.do_look(arguments),
            CommandKind::Take => self.do_take(arguments),
            CommandKind::Drop => self.do_drop(arguments),
            CommandKind::Inventory => self.do_inventory(),
            CommandKind::Attack => self.do_attack(arguments),
            CommandKind::Cast => self.do_cast(arguments),
            CommandKind::Wiki => self.state.wiki.search(arguments),
            CommandKind::Help => help::lookup(&self.registry, arguments),
            CommandKind::Commands => help::summary(&self.registry),
            CommandKind::History => self.do_history(),
            CommandKind::Quit => "Goodbye!".to_string(),
        }
    }

    fn do_look(&self, arguments: &[String]) -> String {
        if arguments.is_empty() {
            return self.describe_location();
        }
        // Creatures first, then loose items, then carried items.
        let creatures = self.state.location.find_creature(arguments);
        if !creatures.is_empty() {
            return match creatures.resolution() {
                Resolution::Unique(creature) => describe_creature(creature),
                _ => ambiguous_reply(&creatures.names()),
            };
        }
        let loose = self.state.location.find_item(arguments);
        if !loose.is_empty() {
            return match loose.resolution() {
                Resolution::Unique(item) => describe_item(item),
                _ => ambiguous_reply(&loose.names()),
            };
        }
        let carried = self.state.inventory.find(arguments);
        if !carried.is_empty() {
            return match carried.resolution() {
                Resolution::Unique(item) => describe_item(item),
                _ => ambiguous_reply(&carried.names()),
            };
        }
        format!("You see no '{}' here.", arguments.join(" "))
    }

    fn describe_location(&self) -> String {
        let location = &self.state.location;
        let mut output = format!("{}\n{}", location.name, location.description);
        for creature in &location.creatures {
            output.push_str(&format!("\n{} is here.", creature.name));
        }
        if !location.items.is_empty() {
            output.push_str(&format!(
                "\nYou see {} here.",
                item::enumerate_items(&location.items)
            ));
        }
        output
    }

    fn do_take(&mut self, arguments: &[String]) -> String {
        if arguments.is_empty() {
            return "Take what?".to_string();
        }
        let matches = self.state.location.find_item(arguments);
        let chosen = match matches.resolution() {
            Resolution::None => return format!("You see no '{}' here.", arguments.join(" ")),
            Resolution::Unique(item) => item.clone(),
            // Identically named duplicates are interchangeable.
            Resolution::Ambiguous(all) if matches.different_names() == 1 => all[0].clone(),
            Resolution::Ambiguous(_) => return ambiguous_reply(&matches.names()),
        };
        match self.state.location.take_item(&chosen) {
            Some(taken) => {
                let reply = format!("You take the {}.", taken.name);
                self.state.inventory.add(taken);
                reply
            }
            None => format!("You see no '{}' here.", arguments.join(" ")),
        }
    }

    fn do_drop(&mut self, arguments: &[String]) -> String {
        if arguments.is_empty() {
            return "Drop what?".to_string();
        }
        let matches = self.state.inventory.find(arguments);
        let chosen = match matches.resolution() {
            Resolution::None => {
                return format!("You are not carrying '{}'.", arguments.join(" "));
            }
            Resolution::Unique(item) => item.clone(),
            Resolution::Ambiguous(all) if matches.different_names() == 1 => all[0].clone(),
            Resolution::Ambiguous(_) => return ambiguous_reply(&matches.names()),
        };
        match self.state.inventory.remove(&chosen) {
            Some(dropped) => {
                let reply = format!("You drop the {}.", dropped.name);
                self.state.location.items.push(dropped);
                reply
            }
            None => format!("You are not carrying '{}'.", arguments.join(" ")),
        }
    }

    fn do_inventory(&self) -> String {
        if self.state.inventory.is_empty() {
            "You are carrying nothing.".to_string()
        } else {
            format!("You are carrying {}.", self.state.inventory.enumerate())
        }
    }

    fn do_attack(&self, arguments: &[String]) -> String {
        if arguments.is_empty() {
            return "Attack what?".to_string();
        }
        let matches = self.state.location.find_creature(arguments);
        match matches.resolution() {
            Resolution::None => format!("You see no '{}' here.", arguments.join(" ")),
            Resolution::Unique(creature) => format!("You attack the {}.", creature.name),
            Resolution::Ambiguous(_) => ambiguous_reply(&matches.names()),
        }
    }

    fn do_cast(&self, arguments: &[String]) -> String {
        if self.state.skills.is_empty() {
            return "You know no skills.".to_string();
        }
        if arguments.is_empty() {
            let known: Vec<String> = self
                .state
                .skills
                .skills()
                .iter()
                .map(|skill| skill.name.singular().to_string())
                .collect();
            return format!("You know {}.", text::enumerate(&known));
        }
        let matches = self.state.skills.find(arguments);
        match matches.resolution() {
            Resolution::None => format!("You know no '{}'.", arguments.join(" ")),
            Resolution::Unique(skill) => format!("You cast {}. {}", skill.name, skill.description),
            Resolution::Ambiguous(_) => ambiguous_reply(&matches.names()),
        }
    }

    fn do_history(&self) -> String {
        if self.state.history.is_empty() {
            return "No commands issued yet.".to_string();
        }
        let lines: Vec<String> = self
            .state
            .history
            .iter()
            .map(|line| format!("  {line}"))
            .collect();
        format!("Recently issued commands:\n{}", lines.join("\n"))
    }
}

fn describe_creature(creature: &Creature) -> String {
    format!(
        "{}\n{} ({} health)",
        creature.name, creature.description, creature.health
    )
}

fn describe_item(item: &Item) -> String {
    format!("{}\n{}", item.name, item.description)
}

fn ambiguous_reply(names: &[String]) -> String {
    format!(
        "Which do you mean: {}? Be more specific.",
        text::enumerate(names)
    )
}

fn unknown_command_reply(verb: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        format!("'{verb}' is not a command.")
    } else {
        let quoted: Vec<String> = suggestions
            .iter()
            .map(|suggestion| format!("'{suggestion}'"))
            .collect();
        format!(
            "'{verb}' is not a command. Did you mean {}?",
            text::enumerate(&quoted)
        )
    }
}
