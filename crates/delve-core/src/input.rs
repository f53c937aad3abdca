//! Validation and tokenization of raw player input.

use crate::error::{CoreError, CoreResult};

/// Maximum accepted length of one input line, in characters.
///
/// Longer lines are rejected before tokenization so pasted or generated
/// text cannot drive the cost of matching or distance computation.
pub const MAX_INPUT_LENGTH: usize = 32_768;

/// One validated line of player input.
///
/// Holds the whitespace-normalized original for echo and history plus
/// the case-folded tokens used for matching. Created fresh every turn
/// and discarded after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInput {
    raw: String,
    tokens: Vec<String>,
}

impl PlayerInput {
    /// Validate and tokenize a raw line.
    ///
    /// Fails with [`CoreError::EmptyInput`] if the line is empty after
    /// trimming, or [`CoreError::InputTooLong`] if it is longer than
    /// [`MAX_INPUT_LENGTH`] characters. On success the token list is
    /// never empty.
    pub fn parse(source: &str) -> CoreResult<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        let length = trimmed.chars().count();
        if length > MAX_INPUT_LENGTH {
            return Err(CoreError::InputTooLong {
                length,
                limit: MAX_INPUT_LENGTH,
            });
        }
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        let tokens = words.iter().map(|word| word.to_lowercase()).collect();
        Ok(Self {
            raw: words.join(" "),
            tokens,
        })
    }

    /// The whitespace-normalized original line, casing preserved.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// All case-folded tokens, in input order. Never empty.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The first token, treated as the command word.
    pub fn verb(&self) -> &str {
        &self.tokens[0]
    }

    /// Every token after the command word.
    pub fn arguments(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// Whether any tokens follow the command word.
    pub fn has_arguments(&self) -> bool {
        self.tokens.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_line() {
        let input = PlayerInput::parse("take sword").unwrap();
        assert_eq!(input.verb(), "take");
        assert_eq!(input.arguments(), ["sword"]);
        assert!(input.has_arguments());
    }

    #[test]
    fn parse_folds_case_but_keeps_raw() {
        let input = PlayerInput::parse("Take  the RUSTY Sword").unwrap();
        assert_eq!(input.tokens(), ["take", "the", "rusty", "sword"]);
        assert_eq!(input.raw(), "Take the RUSTY Sword");
    }

    #[test]
    fn parse_collapses_whitespace() {
        let input = PlayerInput::parse("  look \t  around \n").unwrap();
        assert_eq!(input.tokens(), ["look", "around"]);
        assert_eq!(input.raw(), "look around");
    }

    #[test]
    fn empty_line_is_rejected() {
        assert_eq!(PlayerInput::parse(""), Err(CoreError::EmptyInput));
        assert_eq!(PlayerInput::parse("   \t "), Err(CoreError::EmptyInput));
    }

    #[test]
    fn over_length_line_is_rejected() {
        let line = "a".repeat(MAX_INPUT_LENGTH + 1);
        assert_eq!(
            PlayerInput::parse(&line),
            Err(CoreError::InputTooLong {
                length: MAX_INPUT_LENGTH + 1,
                limit: MAX_INPUT_LENGTH,
            })
        );
    }

    #[test]
    fn line_at_the_limit_is_accepted() {
        let line = "a".repeat(MAX_INPUT_LENGTH);
        assert!(PlayerInput::parse(&line).is_ok());
    }

    #[test]
    fn single_word_has_no_arguments() {
        let input = PlayerInput::parse("look").unwrap();
        assert_eq!(input.verb(), "look");
        assert!(input.arguments().is_empty());
        assert!(!input.has_arguments());
    }
}
