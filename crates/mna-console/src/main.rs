use std::io::{self, BufRead, Write};

use eyre::Result;

use mna_console::commands::{self, Reply};
use mna_console::config;
use mna_console::state::ConsoleState;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::load_config()?;
    let mut state = ConsoleState::new(config, config::config_path().ok());

    println!("Mini Nutritional Assessment\n\n{}", commands::HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match commands::parse(&line).and_then(|command| commands::execute(&mut state, command)) {
            Ok(Reply::Continue(text)) => println!("{text}"),
            Ok(Reply::Quit) => break,
            Err(e) => println!("error: {e}"),
        }
    }

    Ok(())
}
