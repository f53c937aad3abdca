//! Error types for the game layer.

use delve_core::CoreError;
use thiserror::Error;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game session.
///
/// Replies the player can act on next turn ("not found", "be more
/// specific", an empty inventory) are ordinary `Ok` strings, not errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Invalid input or a tripped resource guard in the resolution core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A command name or alias is already taken by a registered command.
    #[error("command word already registered: '{0}'")]
    DuplicateCommand(String),

    /// The embedded wiki corpus failed to deserialize.
    #[error("built-in wiki corpus is invalid: {0}")]
    Corpus(#[from] serde_json::Error),
}
