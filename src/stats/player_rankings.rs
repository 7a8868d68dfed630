use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::RankingSettings;
use crate::domain::{BYE_ID, Match, PlayerStats, Team};
use crate::stats::roster::RosterIndex;
use crate::stats::score::{Side, resolve_score};

/// Aggregate played matches into per-player proportional statistics.
///
/// Players are resolved through the explicit match lineup when present,
/// otherwise through the team's member list, falling back to the team name.
/// Every member of a side is credited individually with the side's result.
pub fn calculate_player_rankings(
    teams: &[Team],
    matches: &[Match],
    settings: &RankingSettings,
) -> Vec<PlayerStats> {
    let roster = RosterIndex::new(teams);
    let mut rows: Vec<PlayerStats> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for team in teams {
        for name in default_names(team) {
            ensure_row(&mut rows, &mut index, &name);
        }
    }

    for m in matches {
        if !m.played {
            continue;
        }
        let Some(score) = m.score.as_ref() else {
            continue;
        };
        let Some((side_a, side_b)) = side_names(m, teams, &roster) else {
            continue;
        };

        let summary = resolve_score(score);
        let winner = summary.winner();

        for (names, side) in [(&side_a, Side::A), (&side_b, Side::B)] {
            let (sets_won, sets_lost, games_won, games_lost) = summary.from_side(side);
            for name in names {
                let row_index = ensure_row(&mut rows, &mut index, name);
                let row = &mut rows[row_index];
                row.played += 1;
                row.sets_won += sets_won;
                row.sets_lost += sets_lost;
                row.games_won += games_won;
                row.games_lost += games_lost;
                match winner {
                    Some(w) if w == side => row.won += 1,
                    Some(_) => row.lost += 1,
                    None => {}
                }
            }
        }
    }

    for row in &mut rows {
        if row.played > 0 {
            let played = row.played as f64;
            row.win_rate = row.won as f64 / played * 100.0;
            row.avg_set_diff = (row.sets_won as f64 - row.sets_lost as f64) / played;
            row.avg_game_diff = (row.games_won as f64 - row.games_lost as f64) / played;
        }
    }

    rows.sort_by(|a, b| compare_rows(a, b, settings));
    rows
}

fn default_names(team: &Team) -> Vec<String> {
    if team.players.is_empty() {
        vec![team.name.clone()]
    } else {
        team.players.clone()
    }
}

fn ensure_row(rows: &mut Vec<PlayerStats>, index: &mut HashMap<String, usize>, name: &str) -> usize {
    if let Some(&existing) = index.get(name) {
        return existing;
    }
    rows.push(PlayerStats::zeroed(name));
    let row_index = rows.len() - 1;
    index.insert(name.to_string(), row_index);
    row_index
}

fn side_names(
    m: &Match,
    teams: &[Team],
    roster: &RosterIndex,
) -> Option<(Vec<String>, Vec<String>)> {
    if let (Some(lineup_a), Some(lineup_b)) = (&m.players_a, &m.players_b) {
        let names = |lineup: &Vec<String>| lineup.iter().map(|id| roster.name_of(id)).collect();
        return Some((names(lineup_a), names(lineup_b)));
    }

    let team_a = teams.iter().find(|t| t.id == m.team_a_id)?;
    let team_b = teams.iter().find(|t| t.id == m.team_b_id)?;
    if team_a.id == BYE_ID || team_b.id == BYE_ID {
        return None;
    }
    Some((default_names(team_a), default_names(team_b)))
}

/// Win rate, then average set differential, then average game differential,
/// each descending with its tolerance
fn compare_rows(a: &PlayerStats, b: &PlayerStats, settings: &RankingSettings) -> Ordering {
    if (b.win_rate - a.win_rate).abs() > settings.win_rate_tolerance {
        return b.win_rate.partial_cmp(&a.win_rate).unwrap_or(Ordering::Equal);
    }
    if (b.avg_set_diff - a.avg_set_diff).abs() > settings.diff_tolerance {
        return b
            .avg_set_diff
            .partial_cmp(&a.avg_set_diff)
            .unwrap_or(Ordering::Equal);
    }
    b.avg_game_diff
        .partial_cmp(&a.avg_game_diff)
        .unwrap_or(Ordering::Equal)
}
