//! Containment matching of queries against candidate collections.
//!
//! A candidate matches a query when every query token can be bound,
//! one-to-one, to a distinct word of one of the candidate's name forms.
//! Tokens compare to words by exact case-insensitive equality: a token
//! never matches a mere prefix of a word, and no word absorbs two
//! tokens. "big tiger" therefore selects "Big White Tiger" but "big t"
//! selects nothing.

use crate::name::{Name, Named};

/// Find every candidate the query tokens could refer to.
///
/// The result preserves the source order of `candidates`; no relevance
/// score is computed beyond containment. An empty token list matches
/// every candidate.
pub fn find_matches<'a, T, I>(candidates: I, tokens: &[String]) -> Matches<'a, T>
where
    T: Named,
    I: IntoIterator<Item = &'a T>,
{
    let matched = candidates
        .into_iter()
        .filter(|candidate| name_contains(candidate.name(), tokens))
        .collect();
    Matches { matched }
}

/// True when one of the name's forms can absorb every token.
fn name_contains(name: &Name, tokens: &[String]) -> bool {
    name.forms().any(|form| form_contains(form, tokens))
}

/// True when every token binds to a distinct word of `form`.
fn form_contains(form: &str, tokens: &[String]) -> bool {
    let mut words: Vec<String> = form.split_whitespace().map(str::to_lowercase).collect();
    for token in tokens {
        let token = token.to_lowercase();
        match words.iter().position(|word| *word == token) {
            // Consume the word so no token can reuse it.
            Some(index) => {
                words.swap_remove(index);
            }
            None => return false,
        }
    }
    true
}

/// The candidates that matched one query, in source order.
#[derive(Debug)]
pub struct Matches<'a, T> {
    matched: Vec<&'a T>,
}

impl<'a, T: Named> Matches<'a, T> {
    /// Number of matching candidates.
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Iterate over the matches in source order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.matched.iter().copied()
    }

    /// The first match, if any.
    pub fn first(&self) -> Option<&'a T> {
        self.matched.first().copied()
    }

    /// Display names of the matches, in source order.
    pub fn names(&self) -> Vec<String> {
        self.matched
            .iter()
            .map(|candidate| candidate.name().singular().to_string())
            .collect()
    }

    /// How many distinct display names the matches carry.
    ///
    /// Two items both named "Apple" count once; callers use this to tell
    /// interchangeable duplicates from a genuine ambiguity.
    pub fn different_names(&self) -> usize {
        let mut seen: Vec<&Name> = Vec::new();
        for candidate in &self.matched {
            let name = candidate.name();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen.len()
    }

    /// Collapse the matches into the three-way outcome the caller acts on.
    pub fn resolution(&self) -> Resolution<'a, T> {
        match self.matched.as_slice() {
            [] => Resolution::None,
            &[single] => Resolution::Unique(single),
            _ => Resolution::Ambiguous(self.matched.clone()),
        }
    }
}

/// Three-way outcome of a match: nothing, exactly one, or several.
///
/// The engine never guesses among several matches; an ambiguous outcome
/// obliges the caller to ask the player to be more specific.
#[derive(Debug)]
pub enum Resolution<'a, T> {
    /// No candidate satisfied the query.
    None,
    /// Exactly one candidate satisfied the query; auto-resolve to it.
    Unique(&'a T),
    /// Several candidates satisfied the query, in source order.
    Ambiguous(Vec<&'a T>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tigers() -> Vec<Name> {
        vec![Name::new("Big White Tiger"), Name::new("Small Black Tiger")]
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| (*word).to_string()).collect()
    }

    #[test]
    fn single_token_selects_unique_candidate() {
        let candidates = tigers();
        let matches = find_matches(&candidates, &tokens(&["white"]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.names(), ["Big White Tiger"]);
    }

    #[test]
    fn shared_word_is_ambiguous_in_source_order() {
        let candidates = vec![Name::new("Big White Tiger"), Name::new("Big Black Tiger")];
        let matches = find_matches(&candidates, &tokens(&["big"]));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches.names(), ["Big White Tiger", "Big Black Tiger"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let candidates = tigers();
        let upper = find_matches(&candidates, &tokens(&["BIG", "TIGER"]));
        let lower = find_matches(&candidates, &tokens(&["big", "tiger"]));
        assert_eq!(upper.names(), lower.names());
        assert_eq!(upper.names(), ["Big White Tiger"]);
    }

    #[test]
    fn token_must_equal_a_word_exactly() {
        let candidates = tigers();
        // Prefixes are not matches under the containment rule.
        assert!(find_matches(&candidates, &tokens(&["whit"])).is_empty());
        assert!(find_matches(&candidates, &tokens(&["tig"])).is_empty());
    }

    #[test]
    fn tokens_bind_one_to_one() {
        let candidates = vec![Name::new("Big Tiger")];
        // Two "big" tokens cannot share the single "Big" word.
        assert!(find_matches(&candidates, &tokens(&["big", "big"])).is_empty());
        let candidates = vec![Name::new("Big Big Tiger")];
        assert_eq!(find_matches(&candidates, &tokens(&["big", "big"])).len(), 1);
    }

    #[test]
    fn every_token_must_bind() {
        let candidates = tigers();
        assert!(find_matches(&candidates, &tokens(&["big", "bear"])).is_empty());
    }

    #[test]
    fn plural_and_alias_forms_match() {
        let candidates = vec![
            Name::new("Apple")
                .with_plural("Apples")
                .with_alias("fruit"),
        ];
        assert_eq!(find_matches(&candidates, &tokens(&["apples"])).len(), 1);
        assert_eq!(find_matches(&candidates, &tokens(&["fruit"])).len(), 1);
    }

    #[test]
    fn forms_are_not_merged() {
        // "rusty blade" must not match across the singular and the alias.
        let candidates = vec![Name::new("Rusty Sword").with_alias("blade")];
        assert!(find_matches(&candidates, &tokens(&["rusty", "blade"])).is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let candidates = tigers();
        let matches = find_matches(&candidates, &[]);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn matching_is_idempotent() {
        let candidates = tigers();
        let query = tokens(&["tiger"]);
        let first = find_matches(&candidates, &query);
        let second = find_matches(&candidates, &query);
        assert_eq!(first.names(), second.names());
    }

    #[test]
    fn resolution_three_ways() {
        let candidates = tigers();
        assert!(matches!(
            find_matches(&candidates, &tokens(&["bear"])).resolution(),
            Resolution::None
        ));
        assert!(matches!(
            find_matches(&candidates, &tokens(&["white"])).resolution(),
            Resolution::Unique(name) if name.singular() == "Big White Tiger"
        ));
        assert!(matches!(
            find_matches(&candidates, &tokens(&["tiger"])).resolution(),
            Resolution::Ambiguous(all) if all.len() == 2
        ));
    }

    #[test]
    fn different_names_folds_duplicates() {
        let candidates = vec![Name::new("Apple"), Name::new("Apple"), Name::new("Pear")];
        let matches = find_matches(&candidates, &[]);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches.different_names(), 2);
    }
}
