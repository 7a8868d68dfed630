use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::RankingSettings;
use crate::domain::{BYE_ID, Match, Mode, Team, TeamStats};
use crate::stats::score::{Side, resolve_score};

/// Aggregate played matches into per-team standings.
///
/// Matches referencing a BYE side, an id outside the roster, or carrying no
/// score are skipped. A fully tied score counts as played for both sides but
/// awards no win, loss or points. Rows come back in ranking order.
pub fn calculate_standings(
    teams: &[Team],
    matches: &[Match],
    mode: Mode,
    settings: &RankingSettings,
) -> Vec<TeamStats> {
    let mut rows: Vec<TeamStats> = teams.iter().map(|t| TeamStats::zeroed(&t.id)).collect();
    let index: HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.as_str(), i))
        .collect();

    for m in matches {
        if !m.played {
            continue;
        }
        let Some(score) = m.score.as_ref() else {
            continue;
        };
        let Some((side_a, side_b)) = side_ids(m, mode) else {
            continue;
        };
        if side_a
            .iter()
            .chain(side_b.iter())
            .any(|id| !index.contains_key(id.as_str()))
        {
            continue;
        }

        let summary = resolve_score(score);
        let winner = summary.winner();

        credit_side(&mut rows, &index, &side_a, summary.from_side(Side::A), winner == Some(Side::A), winner.is_some(), settings);
        credit_side(&mut rows, &index, &side_b, summary.from_side(Side::B), winner == Some(Side::B), winner.is_some(), settings);
    }

    for row in &mut rows {
        row.win_rate = if row.played > 0 {
            row.won as f64 / row.played as f64 * 100.0
        } else {
            0.0
        };
    }

    rows.sort_by(|a, b| compare_rows(a, b, mode, settings));
    rows
}

/// Resolved side identifiers: lineups for Americano, team ids otherwise
fn side_ids(m: &Match, mode: Mode) -> Option<(Vec<String>, Vec<String>)> {
    if mode == Mode::Americano {
        match (&m.players_a, &m.players_b) {
            (Some(a), Some(b)) => Some((a.clone(), b.clone())),
            _ => None,
        }
    } else {
        if m.team_a_id == BYE_ID || m.team_b_id == BYE_ID {
            return None;
        }
        Some((vec![m.team_a_id.clone()], vec![m.team_b_id.clone()]))
    }
}

fn credit_side(
    rows: &mut [TeamStats],
    index: &HashMap<&str, usize>,
    ids: &[String],
    (sets_won, sets_lost, games_won, games_lost): (u32, u32, u32, u32),
    won: bool,
    decisive: bool,
    settings: &RankingSettings,
) {
    for id in ids {
        let row = &mut rows[index[id.as_str()]];
        row.played += 1;
        row.sets_won += sets_won;
        row.sets_lost += sets_lost;
        row.games_won += games_won;
        row.games_lost += games_lost;
        if won {
            row.won += 1;
            row.points += settings.points_per_win;
        } else if decisive {
            row.lost += 1;
        }
    }
}

/// Points descending, then game differential; Americano prefers the
/// points-per-match ratio when it clearly separates two rows, compensating
/// for unequal match counts caused by ghost byes. Ties beyond these keys keep
/// their insertion order (the sort is stable).
fn compare_rows(a: &TeamStats, b: &TeamStats, mode: Mode, settings: &RankingSettings) -> Ordering {
    if mode == Mode::Americano {
        let ratio_a = points_per_match(a);
        let ratio_b = points_per_match(b);
        if (ratio_a - ratio_b).abs() > settings.points_ratio_tolerance {
            return ratio_b.partial_cmp(&ratio_a).unwrap_or(Ordering::Equal);
        }
    }

    b.points
        .cmp(&a.points)
        .then_with(|| b.game_diff().cmp(&a.game_diff()))
}

fn points_per_match(row: &TeamStats) -> f64 {
    if row.played > 0 {
        row.points as f64 / row.played as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MIX_ID, MatchScore, SetScore};

    fn teams(n: usize) -> Vec<Team> {
        (1..=n)
            .map(|i| Team::new(&format!("t{}", i), &format!("Team {}", i), vec![]))
            .collect()
    }

    fn played(id: &str, a: &str, b: &str, score: MatchScore) -> Match {
        let mut m = Match::fixture(id.to_string(), a.to_string(), b.to_string(), 1);
        m.score = Some(score);
        m.played = true;
        m
    }

    fn score(s1: (u32, u32), s2: (u32, u32)) -> MatchScore {
        MatchScore::new(SetScore::new(s1.0, s1.1), SetScore::new(s2.0, s2.1), None)
    }

    fn row<'a>(rows: &'a [TeamStats], id: &str) -> &'a TeamStats {
        rows.iter().find(|r| r.team_id == id).unwrap()
    }

    #[test]
    fn straight_win_credits_both_sides() {
        let teams = teams(2);
        let matches = vec![played("m1", "t1", "t2", score((6, 2), (6, 3)))];
        let rows = calculate_standings(&teams, &matches, Mode::Singles, &RankingSettings::default());

        let winner = row(&rows, "t1");
        assert_eq!((winner.played, winner.won, winner.points), (1, 1, 3));
        assert_eq!((winner.sets_won, winner.games_won, winner.games_lost), (2, 12, 5));

        let loser = row(&rows, "t2");
        assert_eq!((loser.played, loser.lost, loser.points), (1, 1, 0));
        assert_eq!((loser.sets_lost, loser.games_won, loser.games_lost), (2, 5, 12));
    }

    #[test]
    fn wins_and_played_sum_over_decisive_matches() {
        let teams = teams(3);
        let matches = vec![
            played("m1", "t1", "t2", score((6, 0), (6, 0))),
            played("m2", "t2", "t3", score((3, 6), (2, 6))),
            played("m3", "t1", "t3", score((0, 0), (0, 0))), // tied, not decisive
        ];
        let rows = calculate_standings(&teams, &matches, Mode::Singles, &RankingSettings::default());

        let total_won: u32 = rows.iter().map(|r| r.won).sum();
        let total_played: u32 = rows.iter().map(|r| r.played).sum();
        assert_eq!(total_won, 2);
        assert_eq!(total_played, 6);
    }

    #[test]
    fn tied_match_counts_played_without_points() {
        let teams = teams(2);
        let matches = vec![played("m1", "t1", "t2", score((0, 0), (0, 0)))];
        let rows = calculate_standings(&teams, &matches, Mode::Singles, &RankingSettings::default());

        for r in &rows {
            assert_eq!(r.played, 1);
            assert_eq!(r.won, 0);
            assert_eq!(r.lost, 0);
            assert_eq!(r.points, 0);
        }
    }

    #[test]
    fn bye_unknown_and_unscored_matches_are_skipped() {
        let teams = teams(2);
        let mut unscored = Match::fixture("m3".into(), "t1".into(), "t2".into(), 1);
        unscored.played = true; // flagged played but no score
        let matches = vec![
            played("m1", "t1", BYE_ID, score((6, 0), (6, 0))),
            played("m2", "t1", "t9", score((6, 0), (6, 0))),
            unscored,
        ];
        let rows = calculate_standings(&teams, &matches, Mode::Singles, &RankingSettings::default());
        assert!(rows.iter().all(|r| r.played == 0));
    }

    #[test]
    fn ranking_prefers_points_then_game_diff() {
        let teams = teams(3);
        let matches = vec![
            // t1 and t3 both beat t2 once; t1 with the wider margin
            played("m1", "t1", "t2", score((6, 0), (6, 0))),
            played("m2", "t3", "t2", score((6, 4), (6, 4))),
        ];
        let rows = calculate_standings(&teams, &matches, Mode::Singles, &RankingSettings::default());
        let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
        assert_eq!(order, vec!["t1", "t3", "t2"]);
    }

    #[test]
    fn americano_ranks_by_points_per_match_on_unequal_schedules() {
        let teams = teams(3);
        // t1: 2 wins in 3 matches (ratio 2.0); t2: 1 win in 1 match (ratio 3.0)
        let fixtures = [
            ("m1", "t1", "t3", true),
            ("m2", "t1", "t3", true),
            ("m3", "t1", "t3", false),
            ("m4", "t2", "t3", true),
        ];
        let matches: Vec<Match> = fixtures
            .iter()
            .map(|(id, a, b, won)| {
                let s = if *won { score((6, 0), (6, 0)) } else { score((0, 6), (0, 6)) };
                let mut m = played(id, MIX_ID, MIX_ID, s);
                m.players_a = Some(vec![a.to_string()]);
                m.players_b = Some(vec![b.to_string()]);
                m
            })
            .collect();

        let rows =
            calculate_standings(&teams, &matches, Mode::Americano, &RankingSettings::default());
        let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
        // raw points would put t1 (6) first; the per-match ratio puts t2 (3.0) ahead
        assert_eq!(order, vec!["t2", "t1", "t3"]);
    }

    #[test]
    fn americano_matches_without_lineups_are_skipped() {
        let teams = teams(2);
        let matches = vec![played("m1", MIX_ID, MIX_ID, score((6, 0), (6, 0)))];
        let rows =
            calculate_standings(&teams, &matches, Mode::Americano, &RankingSettings::default());
        assert!(rows.iter().all(|r| r.played == 0));
    }
}
