//! Terminal frontend for the Xeno RPG.

mod worldgen;

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use colored::Colorize;

use xeno_engine::{GameConfig, GameSession};

#[derive(Parser)]
#[command(name = "xeno", about = "Xeno, a small turn-based text RPG", version)]
struct Cli {
    /// RNG seed for a reproducible run (random by default)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let world = worldgen::default_world().map_err(|e| e.to_string())?;
    let config = GameConfig::default().with_seed(seed);
    let mut session = GameSession::new(world, config).map_err(|e| e.to_string())?;

    println!("{}\n", session.opening());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_over() {
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
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}
