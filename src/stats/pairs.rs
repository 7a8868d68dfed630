use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{Match, PairStats, Team};
use crate::stats::roster::RosterIndex;
use crate::stats::score::{Side, resolve_score};

/// Aggregate two-player partnerships into win-rate statistics.
///
/// A side contributes a pair record only when it fields exactly two players,
/// via an explicit lineup or a two-member team. Pair identity is
/// order-independent: names are sorted before keying, so `[Bob, Ann]` and
/// `[Ann, Bob]` land in the same row. Output is sorted by win rate
/// descending.
pub fn calculate_pair_stats(teams: &[Team], matches: &[Match]) -> Vec<PairStats> {
    let roster = RosterIndex::new(teams);
    let mut rows: Vec<PairStats> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for m in matches {
        if !m.played {
            continue;
        }
        let Some(score) = m.score.as_ref() else {
            continue;
        };
        let Some(winner) = resolve_score(score).winner() else {
            continue;
        };

        record_side(&mut rows, &mut index, &roster, m, Side::A, winner == Side::A);
        record_side(&mut rows, &mut index, &roster, m, Side::B, winner == Side::B);
    }

    for row in &mut rows {
        row.win_rate = if row.played > 0 {
            row.won as f64 / row.played as f64 * 100.0
        } else {
            0.0
        };
    }

    rows.sort_by(|a, b| b.win_rate.partial_cmp(&a.win_rate).unwrap_or(Ordering::Equal));
    rows
}

fn record_side(
    rows: &mut Vec<PairStats>,
    index: &mut HashMap<(String, String), usize>,
    roster: &RosterIndex,
    m: &Match,
    side: Side,
    won: bool,
) {
    let Some(mut names) = pair_names(roster, m, side) else {
        return;
    };
    names.sort();
    let key = (names[0].clone(), names[1].clone());

    let row_index = *index.entry(key).or_insert_with(|| {
        rows.push(PairStats {
            p1: names[0].clone(),
            p2: names[1].clone(),
            played: 0,
            won: 0,
            lost: 0,
            win_rate: 0.0,
        });
        rows.len() - 1
    });

    let row = &mut rows[row_index];
    row.played += 1;
    if won {
        row.won += 1;
    } else {
        row.lost += 1;
    }
}

/// The two players fielded by a side, when it is an actual pair
fn pair_names(roster: &RosterIndex, m: &Match, side: Side) -> Option<Vec<String>> {
    let (lineup, team_id) = match side {
        Side::A => (&m.players_a, &m.team_a_id),
        Side::B => (&m.players_b, &m.team_b_id),
    };

    if let Some(entries) = lineup {
        if entries.len() == 2 {
            return Some(entries.iter().map(|id| roster.name_of(id)).collect());
        }
        return None;
    }

    let team = roster.get(team_id)?;
    if team.players.len() == 2 {
        Some(team.players.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MIX_ID, MatchScore, SetScore};

    fn score(a_wins: bool) -> MatchScore {
        let (s1, s2) = if a_wins {
            ((6, 1), (6, 2))
        } else {
            ((1, 6), (2, 6))
        };
        MatchScore::new(SetScore::new(s1.0, s1.1), SetScore::new(s2.0, s2.1), None)
    }

    fn lineup_match(id: &str, a: [&str; 2], b: [&str; 2], a_wins: bool) -> Match {
        let mut m = Match::fixture(id.to_string(), MIX_ID.to_string(), MIX_ID.to_string(), 1);
        m.players_a = Some(a.iter().map(|s| s.to_string()).collect());
        m.players_b = Some(b.iter().map(|s| s.to_string()).collect());
        m.score = Some(score(a_wins));
        m.played = true;
        m
    }

    #[test]
    fn pair_key_is_order_independent() {
        let teams = vec![Team::new("t1", "Aces", vec!["Bob".into(), "Ann".into()])];
        let mut from_team = Match::fixture("m1".into(), "t1".into(), "t9".into(), 1);
        from_team.score = Some(score(true));
        from_team.played = true;
        // same pair through an explicit lineup, reversed order
        let from_lineup = lineup_match("m2", ["Ann", "Bob"], ["Cid", "Dee"], true);

        let rows = calculate_pair_stats(&teams, &[from_team, from_lineup]);
        let aces = rows.iter().find(|r| r.p1 == "Ann" && r.p2 == "Bob").unwrap();
        assert_eq!(aces.played, 2);
        assert_eq!(aces.won, 2);
        assert_eq!(aces.win_rate, 100.0);
    }

    #[test]
    fn sides_without_exactly_two_players_contribute_nothing() {
        let teams = vec![
            Team::new("t1", "Solo", vec!["Eva".into()]),
            Team::new("t2", "Trio", vec!["A".into(), "B".into(), "C".into()]),
        ];
        let mut m = Match::fixture("m1".into(), "t1".into(), "t2".into(), 1);
        m.score = Some(score(true));
        m.played = true;
        assert!(calculate_pair_stats(&teams, &[m]).is_empty());
    }

    #[test]
    fn win_rate_orders_the_output() {
        let matches = vec![
            lineup_match("m1", ["A", "B"], ["C", "D"], false),
            lineup_match("m2", ["A", "B"], ["C", "D"], false),
            lineup_match("m3", ["A", "B"], ["C", "D"], true),
        ];
        let rows = calculate_pair_stats(&[], &matches);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].p1.as_str(), rows[0].p2.as_str()), ("C", "D"));
        assert!((rows[0].win_rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(rows[1].played, 3);
        assert_eq!(rows[1].won, 1);
    }

    #[test]
    fn tied_matches_record_no_pair_outcome() {
        let mut m = lineup_match("m1", ["A", "B"], ["C", "D"], true);
        m.score = Some(MatchScore::new(SetScore::new(0, 0), SetScore::new(0, 0), None));
        assert!(calculate_pair_stats(&[], &[m]).is_empty());
    }
}
