//! Game-side consumers of the Delve resolution core.
//!
//! Where `delve-core` decides what a query *could* mean, this crate
//! decides what to *do* about it: a command registry with exact lookup
//! and "did you mean" suggestions, adapters that feed live candidate
//! collections (inventory, creatures at a location, skills, wiki
//! articles) into the containment matcher, and a turn-based session
//! that ties them together.

/// Command descriptors, kinds, and the registry.
pub mod command;
/// Insertion-ordered occurrence counting for the deep search.
pub mod counter;
/// Creatures and locations.
pub mod creature;
/// The demo world.
pub mod demo;
/// Error types for the game layer.
pub mod error;
/// Help lookup over the command registry.
pub mod help;
/// History of issued commands.
pub mod history;
/// Items and inventories.
pub mod item;
/// Interactive session management.
pub mod session;
/// Skills and the skillbook.
pub mod skill;
/// Text helpers for replies.
pub mod text;
/// The per-turn decision sequence.
pub mod turn;
/// The in-game wiki and its two-tier search.
pub mod wiki;

pub use command::{Command, CommandDescriptor, CommandKind, CommandRegistry};
pub use creature::{Creature, Location};
pub use error::{GameError, GameResult};
pub use history::CommandHistory;
pub use item::{Inventory, Item};
pub use session::{GameSession, GameState};
pub use skill::{Skill, Skillbook};
pub use turn::{SUGGESTION_LIMIT, TurnOutcome, evaluate};
pub use wiki::{Article, Wiki};
