use log::{info, warn};

use crate::domain::{Match, PlayoffSlot, TeamStats};

/// Synthetic rounds placing the bracket after any regular-season round
pub const SEMIFINAL_ROUND: u32 = 98;
pub const FINAL_ROUND: u32 = 99;

/// Placeholder side ids resolved when the feeding semifinal reports a winner
pub const SEMI_1_WINNER: &str = "winner-semi-1";
pub const SEMI_2_WINNER: &str = "winner-semi-2";

/// Resolve a requested bracket size against the standings size.
///
/// `-1` means "all teams", rounded down to a power of two and capped at 16.
pub fn resolve_bracket_size(requested: i32, standings_len: usize) -> usize {
    if requested >= 0 {
        return requested as usize;
    }
    if standings_len >= 16 {
        16
    } else if standings_len >= 8 {
        8
    } else if standings_len >= 4 {
        4
    } else {
        2
    }
}

/// Build single-elimination bracket matches from a ranked standings snapshot.
///
/// Only sizes 2 (final) and 4 (semifinals feeding a final) produce matches;
/// anything else is outside the bracket policy and yields nothing.
pub fn generate_playoffs(standings: &[TeamStats], requested: i32) -> Vec<Match> {
    let size = resolve_bracket_size(requested, standings.len());
    if size == 0 {
        return Vec::new();
    }
    if standings.len() < size {
        warn!(
            "Playoff size {} exceeds standings size {}; skipping bracket",
            size,
            standings.len()
        );
        return Vec::new();
    }

    let seeds: Vec<&str> = standings
        .iter()
        .take(size)
        .map(|s| s.team_id.as_str())
        .collect();

    let matches = match size {
        2 => vec![final_match(seeds[0].to_string(), seeds[1].to_string())],
        4 => vec![
            semifinal("semi-1", "Semifinal A", seeds[0], seeds[3], PlayoffSlot::A),
            semifinal("semi-2", "Semifinal B", seeds[1], seeds[2], PlayoffSlot::B),
            final_match(SEMI_1_WINNER.to_string(), SEMI_2_WINNER.to_string()),
        ],
        other => {
            warn!("Unsupported playoff size {}; no bracket generated", other);
            Vec::new()
        }
    };

    if !matches.is_empty() {
        info!("Generated {}-team playoff bracket", size);
    }
    matches
}

fn semifinal(id: &str, label: &str, team_a: &str, team_b: &str, slot: PlayoffSlot) -> Match {
    let mut m = Match::fixture(
        id.to_string(),
        team_a.to_string(),
        team_b.to_string(),
        SEMIFINAL_ROUND,
    );
    m.is_playoff = true;
    m.playoff_label = Some(label.to_string());
    m.next_match_id = Some("final".to_string());
    m.next_match_slot = Some(slot);
    m
}

fn final_match(team_a: String, team_b: String) -> Match {
    let mut m = Match::fixture("final".to_string(), team_a, team_b, FINAL_ROUND);
    m.is_playoff = true;
    m.playoff_label = Some("Final".to_string());
    m
}
