pub mod archive;
pub mod cli;
pub mod config;
pub mod domain;
pub mod schedule;
pub mod services;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{Cli, Command, ModeArg};
use crate::domain::{MatchScore, Mode, SetScore, Team, TournamentConfig};
use crate::services::TournamentService;
use crate::services::report;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_schedule(
    roster_path: &Path,
    mode: ModeArg,
    double_round: bool,
    seed: Option<u64>,
) -> Result<()> {
    let teams = load_roster(roster_path)?;
    let config = TournamentConfig {
        name: "Schedule preview".to_string(),
        mode: mode.into(),
        double_round,
        playoff_teams: 0,
    };

    let mut rng = seeded_rng(seed);
    let service = TournamentService::with_rng(config, teams, &mut rng)?;
    report::print_schedule(service.teams(), service.matches());
    Ok(())
}

pub fn handle_standings(file: &Path) -> Result<()> {
    let archived = archive::load_archive_file(file)?;
    let service = TournamentService::from_archive(archived);

    report::print_standings(service.teams(), &service.standings());
    report::print_player_rankings(&service.player_rankings());
    report::print_streaks(&service.streaks());
    report::print_pair_stats(&service.pair_stats());
    Ok(())
}

/// Play a generated doubles tournament to completion, playoffs included
pub fn handle_demo(team_count: usize, seed: Option<u64>) -> Result<()> {
    let teams: Vec<Team> = (1..=team_count)
        .map(|i| {
            Team::new(
                &format!("team-{}", i),
                &format!("Team {}", i),
                vec![format!("Player {}A", i), format!("Player {}B", i)],
            )
        })
        .collect();
    let config = TournamentConfig {
        name: "Demo Cup".to_string(),
        mode: Mode::Doubles,
        double_round: false,
        playoff_teams: if team_count >= 4 { 4 } else { 2 },
    };

    let mut rng = seeded_rng(seed);
    let mut service = TournamentService::with_rng(config, teams, &mut rng)?;
    report::print_schedule(service.teams(), service.matches());

    // keep recording until the bracket itself is played out
    while let Some(id) = next_unplayed(&service) {
        let score = random_score(&mut rng);
        service.record_result(&id, score, None, None)?;
    }

    report::print_schedule(service.teams(), service.matches());
    report::print_standings(service.teams(), &service.standings());
    report::print_player_rankings(&service.player_rankings());
    report::print_streaks(&service.streaks());
    report::print_pair_stats(&service.pair_stats());
    Ok(())
}

fn load_roster(path: &Path) -> Result<Vec<Team>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse roster file")
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn next_unplayed(service: &TournamentService) -> Option<String> {
    service
        .matches()
        .iter()
        .find(|m| !m.played)
        .map(|m| m.id.clone())
}

/// A decisive best-of-three score with plausible game counts
fn random_score(rng: &mut StdRng) -> MatchScore {
    use rand::Rng;

    let a_wins_first = rng.gen_bool(0.5);
    let set = |rng: &mut StdRng, a_wins: bool| {
        let loser_games = rng.gen_range(0..5);
        if a_wins {
            SetScore::new(6, loser_games)
        } else {
            SetScore::new(loser_games, 6)
        }
    };

    let set1 = set(rng, a_wins_first);
    let split = rng.gen_bool(0.3);
    let set2 = set(rng, a_wins_first != split);
    let set3 = split.then(|| {
        let a_wins = rng.gen_bool(0.5);
        set(rng, a_wins)
    });

    MatchScore::new(set1, set2, set3)
}
