use log::info;

use crate::domain::{BYE_ID, Match, Team};

/// Generate a round-robin fixture list using Berger-table rotation.
///
/// An odd roster gets a synthetic BYE entry; pairings involving it produce no
/// match. With `double_round` a mirrored second leg follows the first, with
/// round numbers offset by the first-leg round count.
pub fn generate_round_robin(teams: &[Team], double_round: bool) -> Vec<Match> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut ids: Vec<String> = teams.iter().map(|t| t.id.clone()).collect();
    if ids.len() % 2 != 0 {
        ids.push(BYE_ID.to_string());
    }

    let num_teams = ids.len();
    let rounds = num_teams - 1;
    let half = num_teams / 2;

    let mut matches = Vec::new();

    for round in 0..rounds {
        for slot in 0..half {
            let team_a = &ids[slot];
            let team_b = &ids[num_teams - 1 - slot];

            if team_a != BYE_ID && team_b != BYE_ID {
                matches.push(Match::fixture(
                    format!("match-{}-{}", round, slot),
                    team_a.clone(),
                    team_b.clone(),
                    (round + 1) as u32,
                ));
            }
        }
        rotate(&mut ids);
    }

    if double_round {
        append_return_leg(&mut matches, rounds as u32);
    }

    info!(
        "Generated {} round robin matches for {} teams",
        matches.len(),
        teams.len()
    );
    matches
}

/// Move the last element to index 1; the anchor at index 0 never moves
fn rotate(ids: &mut Vec<String>) {
    if let Some(last) = ids.pop() {
        ids.insert(1, last);
    }
}

fn append_return_leg(matches: &mut Vec<Match>, round_offset: u32) {
    let first_leg_count = matches.len();
    for index in 0..first_leg_count {
        let original = matches[index].clone();
        matches.push(Match::fixture(
            format!("match-return-{}", index),
            original.team_b_id,
            original.team_a_id,
            original.round + round_offset,
        ));
    }
}
