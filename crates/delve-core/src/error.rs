//! Error types for the resolution core.

use thiserror::Error;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced by the resolution core.
///
/// Match outcomes (none, one, many) are ordinary return values, never
/// errors; only invalid input and the tripped distance guard fail hard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The input line was empty after trimming.
    #[error("there is no input to parse")]
    EmptyInput,

    /// The input line exceeded the maximum accepted length.
    #[error("input is {length} characters long, the maximum is {limit}")]
    InputTooLong {
        /// Character count of the rejected line.
        length: usize,
        /// Maximum accepted character count.
        limit: usize,
    },

    /// An edit distance computation would exceed its working-memory budget.
    #[error("edit distance over {cells} cells exceeds the budget of {limit}")]
    DistanceBudgetExceeded {
        /// Cells the dynamic-programming table would cover.
        cells: usize,
        /// Maximum cells one computation may cover.
        limit: usize,
    },
}
