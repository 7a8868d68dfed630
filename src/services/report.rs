use colored::Colorize;
use std::collections::HashMap;

use crate::domain::{Match, MatchOutcome, PairStats, PlayerStats, Streak, Team, TeamStats};

/// Console tables for schedules and analytics snapshots

pub fn print_schedule(teams: &[Team], matches: &[Match]) {
    let names: HashMap<&str, &str> = teams
        .iter()
        .map(|t| (t.id.as_str(), t.name.as_str()))
        .collect();
    let display = |id: &str, lineup: Option<&Vec<String>>| -> String {
        if let Some(players) = lineup {
            players
                .iter()
                .map(|p| names.get(p.as_str()).copied().unwrap_or(p.as_str()))
                .collect::<Vec<_>>()
                .join(" / ")
        } else {
            names.get(id).copied().unwrap_or(id).to_string()
        }
    };

    println!("\n{}", "=== Schedule ===".cyan().bold());
    let mut current_round = 0;
    for m in matches {
        if m.round != current_round {
            current_round = m.round;
            match &m.playoff_label {
                Some(label) => println!("{}", format!("-- {} --", label).as_str().yellow()),
                None => println!("{}", format!("-- Round {} --", current_round).as_str().yellow()),
            }
        }
        println!(
            "  {:<28} vs  {}",
            display(&m.team_a_id, m.players_a.as_ref()),
            display(&m.team_b_id, m.players_b.as_ref())
        );
    }
    println!();
}

pub fn print_standings(teams: &[Team], standings: &[TeamStats]) {
    let names: HashMap<&str, &str> = teams
        .iter()
        .map(|t| (t.id.as_str(), t.name.as_str()))
        .collect();

    println!("\n{}", "=== Standings ===".cyan().bold());
    println!(
        "{:<4} {:<20} {:>3} {:>3} {:>3} {:>4} {:>7} {:>7} {:>6}",
        "#", "Team", "P", "W", "L", "Pts", "Sets", "Games", "Win%"
    );
    println!("{}", "-".repeat(66));
    for (rank, row) in standings.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>3} {:>3} {:>3} {:>4} {:>3}:{:<3} {:>3}:{:<3} {:>5.1}",
            rank + 1,
            names.get(row.team_id.as_str()).copied().unwrap_or(row.team_id.as_str()),
            row.played,
            row.won,
            row.lost,
            row.points,
            row.sets_won,
            row.sets_lost,
            row.games_won,
            row.games_lost,
            row.win_rate
        );
    }
}

pub fn print_player_rankings(rankings: &[PlayerStats]) {
    println!("\n{}", "=== Player Rankings ===".cyan().bold());
    println!(
        "{:<4} {:<20} {:>3} {:>3} {:>3} {:>6} {:>8} {:>8}",
        "#", "Player", "P", "W", "L", "Win%", "SetDiff", "GameDiff"
    );
    println!("{}", "-".repeat(62));
    for (rank, row) in rankings.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>3} {:>3} {:>3} {:>5.1} {:>8.2} {:>8.2}",
            rank + 1,
            row.name,
            row.played,
            row.won,
            row.lost,
            row.win_rate,
            row.avg_set_diff,
            row.avg_game_diff
        );
    }
}

pub fn print_streaks(streaks: &[Streak]) {
    println!("\n{}", "=== Streaks ===".cyan().bold());
    println!("{:<20} {:>8} {:>7} {:>8} {:<8}", "Player", "Current", "MaxWin", "MaxLoss", "Form");
    println!("{}", "-".repeat(56));
    for row in streaks {
        let form: String = row
            .recent
            .iter()
            .map(|o| match o {
                MatchOutcome::W => 'W',
                MatchOutcome::L => 'L',
            })
            .collect();
        let current = if row.current > 0 {
            format!("+{}", row.current).as_str().green()
        } else if row.current < 0 {
            row.current.to_string().as_str().red()
        } else {
            row.current.to_string().as_str().normal()
        };
        println!("{:<20} {:>8} {:>7} {:>8} {:<8}", row.name, current, row.max_win, row.max_loss, form);
    }
}

pub fn print_pair_stats(pairs: &[PairStats]) {
    if pairs.is_empty() {
        return;
    }
    println!("\n{}", "=== Pair Efficiency ===".cyan().bold());
    println!("{:<32} {:>3} {:>3} {:>3} {:>6}", "Pair", "P", "W", "L", "Win%");
    println!("{}", "-".repeat(52));
    for row in pairs {
        println!(
            "{:<32} {:>3} {:>3} {:>3} {:>5.1}",
            format!("{} & {}", row.p1, row.p2),
            row.played,
            row.won,
            row.lost,
            row.win_rate
        );
    }
}
