use std::io::{self, BufRead, Write};

use colored::Colorize;

use delve_game::{CommandKind, GameSession};

pub fn run() -> Result<(), String> {
    let mut session =
        GameSession::demo().map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} the demo world", "Entering".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                let verb = input.split_whitespace().next().unwrap_or("");
                let quit = session
                    .registry()
                    .lookup(verb)
                    .is_some_and(|command| command.kind == CommandKind::Quit);
                if quit {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
