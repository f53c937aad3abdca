//! The per-turn decision sequence.
//!
//! A validated line goes through an explicit, auditable sequence:
//! registry lookup on the verb, then (only on failure) the edit
//! distance fallback that produces suggestions. Each stage yields a
//! tagged outcome instead of branching inline, so the fallback policy
//! stays testable in isolation.

use delve_core::PlayerInput;

use crate::command::{CommandKind, CommandRegistry};
use crate::error::GameResult;

/// How many "did you mean" suggestions an unknown verb earns.
pub const SUGGESTION_LIMIT: usize = 3;

/// Outcome of evaluating one validated input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The verb named a registered command.
    Dispatch {
        /// The matched command's dispatch tag.
        kind: CommandKind,
        /// Case-folded tokens after the command word.
        arguments: Vec<String>,
    },
    /// The verb named nothing.
    UnknownCommand {
        /// The unrecognized verb.
        verb: String,
        /// Up to [`SUGGESTION_LIMIT`] closest command names, best first.
        suggestions: Vec<String>,
    },
}

/// Decide what a validated input line asks for.
///
/// Never advances any game state; rejected raw input never reaches this
/// stage at all.
pub fn evaluate(registry: &CommandRegistry, input: &PlayerInput) -> GameResult<TurnOutcome> {
    if let Some(command) = registry.lookup(input.verb()) {
        Ok(TurnOutcome::Dispatch {
            kind: command.kind,
            arguments: input.arguments().to_vec(),
        })
    } else {
        Ok(TurnOutcome::UnknownCommand {
            verb: input.verb().to_string(),
            suggestions: registry.closest(input.verb(), SUGGESTION_LIMIT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_verb_dispatches_with_arguments() {
        let registry = CommandRegistry::standard();
        let input = PlayerInput::parse("take rusty sword").unwrap();
        let outcome = evaluate(&registry, &input).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Dispatch {
                kind: CommandKind::Take,
                arguments: vec!["rusty".to_string(), "sword".to_string()],
            }
        );
    }

    #[test]
    fn alias_dispatches_like_the_name() {
        let registry = CommandRegistry::standard();
        let input = PlayerInput::parse("get sword").unwrap();
        let outcome = evaluate(&registry, &input).unwrap();
        assert!(matches!(
            outcome,
            TurnOutcome::Dispatch {
                kind: CommandKind::Take,
                ..
            }
        ));
    }

    #[test]
    fn unknown_verb_earns_suggestions() {
        let registry = CommandRegistry::standard();
        let input = PlayerInput::parse("atack tiger").unwrap();
        let outcome = evaluate(&registry, &input).unwrap();
        match outcome {
            TurnOutcome::UnknownCommand { verb, suggestions } => {
                assert_eq!(verb, "atack");
                assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
                assert_eq!(suggestions[0], "attack");
            }
            other => panic!("expected UnknownCommand, got {other:?}"),
        }
    }

    #[test]
    fn empty_registry_suggests_nothing() {
        let registry = CommandRegistry::new();
        let input = PlayerInput::parse("look").unwrap();
        let outcome = evaluate(&registry, &input).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::UnknownCommand {
                verb: "look".to_string(),
                suggestions: Vec::new(),
            }
        );
    }
}
