//! The in-game wiki and its two-tier search.
//!
//! Title search goes through the containment matcher and obeys the usual
//! none/one/many contract. When no title matches, a deep search scans
//! each article's full text for literal occurrences of the query tokens
//! and ranks articles by occurrence count.

use delve_core::{Name, Named, Resolution, find_matches};
use serde::{Deserialize, Serialize};

use crate::counter::CounterMap;
use crate::error::GameResult;
use crate::text;

/// A wiki article: a title plus free text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article title; aliases let shorthand queries land here.
    pub title: Name,
    /// Full article text, scanned by the deep search.
    pub content: String,
    /// Titles of related articles.
    #[serde(default)]
    pub see_also: Vec<String>,
}

impl Article {
    /// Render the article body with its see-also trailer.
    fn render(&self) -> String {
        let mut output = format!("{}\n\n{}", self.title, self.content);
        if !self.see_also.is_empty() {
            output.push_str("\n\nSee also: ");
            output.push_str(&text::enumerate(&self.see_also));
            output.push('.');
        }
        output
    }
}

impl Named for Article {
    fn name(&self) -> &Name {
        &self.title
    }
}

/// An ordered collection of articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wiki {
    articles: Vec<Article>,
}

impl Wiki {
    /// Create a wiki from articles, kept in the given order.
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// The corpus shipped with the game.
    pub fn builtin() -> GameResult<Self> {
        let articles = serde_json::from_str(include_str!("../data/wiki.json"))?;
        Ok(Self::new(articles))
    }

    /// The articles, in corpus order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Search the wiki and render the reply.
    ///
    /// An empty query lists every article. A unique title match renders
    /// the article; an ambiguous one lists the competing titles. When no
    /// title matches, the deep search takes over.
    pub fn search(&self, tokens: &[String]) -> String {
        if tokens.is_empty() {
            return self.listing();
        }
        let matches = find_matches(&self.articles, tokens);
        match matches.resolution() {
            Resolution::None => self.deep_search(tokens),
            Resolution::Unique(article) => article.render(),
            Resolution::Ambiguous(_) => {
                let mut output =
                    String::from("The following article titles match your query:\n");
                for title in matches.names() {
                    output.push_str(&format!("  {title}\n"));
                }
                output.push_str("Be more specific.");
                output
            }
        }
    }

    /// Scan article contents for literal token occurrences and rank the
    /// articles by how often the tokens appear.
    fn deep_search(&self, tokens: &[String]) -> String {
        let mut counter: CounterMap<&Article> = CounterMap::new();
        for article in &self.articles {
            let content = article.content.to_lowercase();
            let occurrences: usize = tokens
                .iter()
                .map(|token| count_occurrences(&content, &token.to_lowercase()))
                .sum();
            if occurrences != 0 {
                counter.increment(article, occurrences);
            }
        }
        if counter.is_empty() {
            return "No article matches your query.".to_string();
        }
        let entries: Vec<String> = counter
            .into_descending()
            .into_iter()
            .map(|(article, count)| {
                let noun = if count > 1 { "matches" } else { "match" };
                format!("  {} ({count} {noun})", article.title)
            })
            .collect();
        format!(
            "The following articles contain text that matches your query:\n{}",
            entries.join("\n")
        )
    }

    /// The article count and every title.
    fn listing(&self) -> String {
        let titles: Vec<String> = self
            .articles
            .iter()
            .map(|article| format!("  {}", article.title))
            .collect();
        format!(
            "The wiki has the following {} articles:\n{}",
            self.articles.len(),
            titles.join("\n")
        )
    }
}

/// Count non-overlapping literal occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
