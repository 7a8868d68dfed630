use std::collections::HashMap;

use crate::config::RankingSettings;
use crate::domain::{Match, MatchOutcome, Streak, Team, is_synthetic_id};
use crate::stats::roster::RosterIndex;
use crate::stats::score::{Side, resolve_score};

/// Replay played matches in chronological order and track win/loss streaks
/// per player.
///
/// Matches without a date sort first (treated as timestamp zero), with the
/// round number as tie-break. A result that reverses the running streak
/// resets it to plus or minus one. Output is ordered by current streak
/// descending, so active win streaks surface first.
pub fn calculate_streaks(
    teams: &[Team],
    matches: &[Match],
    settings: &RankingSettings,
) -> Vec<Streak> {
    let roster = RosterIndex::new(teams);
    let mut rows: Vec<Streak> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for team in teams {
        let names = if team.players.is_empty() {
            vec![team.name.clone()]
        } else {
            team.players.clone()
        };
        for name in names {
            if !is_synthetic_id(&name) {
                ensure_row(&mut rows, &mut index, &name);
            }
        }
    }

    let mut ordered: Vec<&Match> = matches
        .iter()
        .filter(|m| m.played && m.score.is_some())
        .collect();
    ordered.sort_by_key(|m| (m.date.map(|d| d.timestamp_millis()).unwrap_or(0), m.round));

    for m in ordered {
        let Some(score) = m.score.as_ref() else {
            continue;
        };
        let Some(winner) = resolve_score(score).winner() else {
            continue;
        };

        let side_a = roster.side_players(&m.team_a_id, m.players_a.as_ref());
        let side_b = roster.side_players(&m.team_b_id, m.players_b.as_ref());

        for name in &side_a {
            apply_result(&mut rows, &mut index, name, winner == Side::A, settings);
        }
        for name in &side_b {
            apply_result(&mut rows, &mut index, name, winner == Side::B, settings);
        }
    }

    rows.sort_by(|a, b| b.current.cmp(&a.current));
    rows
}

fn ensure_row(rows: &mut Vec<Streak>, index: &mut HashMap<String, usize>, name: &str) -> usize {
    if let Some(&existing) = index.get(name) {
        return existing;
    }
    rows.push(Streak::neutral(name));
    let row_index = rows.len() - 1;
    index.insert(name.to_string(), row_index);
    row_index
}

fn apply_result(
    rows: &mut Vec<Streak>,
    index: &mut HashMap<String, usize>,
    name: &str,
    won: bool,
    settings: &RankingSettings,
) {
    if is_synthetic_id(name) {
        return;
    }
    let row_index = ensure_row(rows, index, name);
    let streak = &mut rows[row_index];

    streak.recent.push(if won { MatchOutcome::W } else { MatchOutcome::L });
    if streak.recent.len() > settings.recent_form_window {
        streak.recent.remove(0);
    }

    if won {
        streak.current = if streak.current < 0 { 1 } else { streak.current + 1 };
        streak.max_win = streak.max_win.max(streak.current as u32);
    } else {
        streak.current = if streak.current > 0 { -1 } else { streak.current - 1 };
        streak.max_loss = streak.max_loss.max(streak.current.unsigned_abs());
    }
}
