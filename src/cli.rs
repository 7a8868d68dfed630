use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::Mode;

#[derive(Parser, Debug)]
#[command(author, version, about = "padel tournament scheduling and statistics engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Generate a fixture list for a roster file
    Schedule {
        /// JSON file holding the roster (array of teams)
        #[arg(short, long)]
        roster: PathBuf,
        /// Tournament format
        #[arg(short, long, value_enum, default_value_t = ModeArg::Doubles)]
        mode: ModeArg,
        /// Add a mirrored second leg (round robin only)
        #[arg(long)]
        double_round: bool,
        /// Seed for the Americano shuffle (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print standings and analytics for an archived tournament
    Standings {
        /// JSON file holding a tournament snapshot
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Simulate a complete tournament end to end
    Demo {
        /// Number of doubles teams to generate
        #[arg(long, default_value_t = 4)]
        teams: usize,
        /// Seed for schedule and score generation (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Singles,
    Doubles,
    Americano,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Singles => Mode::Singles,
            ModeArg::Doubles => Mode::Doubles,
            ModeArg::Americano => Mode::Americano,
        }
    }
}
