use anyhow::Result;

use padel_tournament::cli::Command;
use padel_tournament::{handle_demo, handle_schedule, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Schedule {
            roster,
            mode,
            double_round,
            seed,
        } => handle_schedule(roster, *mode, *double_round, *seed),
        Command::Standings { file } => handle_standings(file),
        Command::Demo { teams, seed } => handle_demo(*teams, *seed),
    }
}
