//! Help lookup over the command registry.
//!
//! Help queries go through the containment matcher like every other
//! candidate lookup, so `help inv` resolves the inventory command while
//! a query matching several commands is reported, never guessed.

use delve_core::{Resolution, find_matches};

use crate::command::{CommandDescriptor, CommandRegistry};
use crate::text;

/// Render help for a query, or the full command summary without one.
pub fn lookup(registry: &CommandRegistry, tokens: &[String]) -> String {
    if tokens.is_empty() {
        return summary(registry);
    }
    let matches = find_matches(registry.descriptors(), tokens);
    match matches.resolution() {
        Resolution::None => format!("No command matches '{}'.", tokens.join(" ")),
        Resolution::Unique(descriptor) => render(descriptor),
        Resolution::Ambiguous(_) => format!(
            "Several commands match your query: {}. Be more specific.",
            text::enumerate(&matches.names())
        ),
    }
}

/// One line per command: padded name, then help text.
pub fn summary(registry: &CommandRegistry) -> String {
    let mut output = String::from("Commands:\n");
    for command in registry.iter() {
        output.push_str(&format!(
            "  {:<12} {}\n",
            command.descriptor.canonical(),
            command.descriptor.help()
        ));
    }
    output.push_str("Type 'help <command>' for details on one command.");
    output
}

fn render(descriptor: &CommandDescriptor) -> String {
    let mut output = format!("{} — {}", descriptor.canonical(), descriptor.help());
    let aliases = descriptor.aliases();
    if !aliases.is_empty() {
        output.push_str(&format!("\nAliases: {}.", aliases.join(", ")));
    }
    output
}
