use comfy_table::{ContentArrangement, Table};

use delve_game::CommandRegistry;

pub fn run() -> Result<(), String> {
    let registry = CommandRegistry::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Command", "Aliases", "Help"]);

    for command in registry.iter() {
        let aliases = command.descriptor.aliases().join(", ");
        let aliases = if aliases.is_empty() {
            "—".to_string()
        } else {
            aliases
        };
        table.add_row(vec![
            command.descriptor.canonical(),
            aliases.as_str(),
            command.descriptor.help(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} commands", registry.len());

    Ok(())
}
