//! Free-text resolution core for the Delve text adventure.
//!
//! Every player interaction starts as one imprecise line of text that has
//! to become either a registered command or a specific entity picked from
//! a live collection (inventory items, creatures in a location, wiki
//! articles, skills). This crate is that resolution layer: it validates
//! and tokenizes raw input, decides which named candidates a query can
//! refer to, and ranks "did you mean" suggestions with a memory-bounded
//! edit distance.
//!
//! The crate is pure: every function is a function of its arguments,
//! holds no state between calls, and performs no I/O. Candidate
//! collections are borrowed from the caller per call and never cached.

/// Bounded edit distance and closest-candidate ranking.
pub mod distance;
/// Error types used throughout the crate.
pub mod error;
/// Validation and tokenization of raw player input.
pub mod input;
/// Containment matching of queries against candidate collections.
pub mod matcher;
/// Display names and the `Named` capability.
pub mod name;

pub use distance::{DISTANCE_CELL_LIMIT, closest, edit_distance};
pub use error::{CoreError, CoreResult};
pub use input::{MAX_INPUT_LENGTH, PlayerInput};
pub use matcher::{Matches, Resolution, find_matches};
pub use name::{Name, Named};
