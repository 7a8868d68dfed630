use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{GHOST_PREFIX, MIX_ID, Match, Team, is_synthetic_id};

/// The three ways a block of four splits into two pairs
const BLOCK_PARTITIONS: [[usize; 4]; 3] = [[0, 1, 2, 3], [0, 2, 1, 3], [0, 3, 1, 2]];

/// Generate a rotating-partner fixture list for individual participants.
///
/// Each mixing pass shuffles the roster, chunks it into blocks of four and
/// plays the three pair partitions inside every block, so every block member
/// partners with and opposes every other exactly once per pass. The roster is
/// padded with ghost entries to a multiple of four; a block containing a
/// ghost emits no matches.
pub fn generate_americano<R: Rng + ?Sized>(
    participants: &[Team],
    passes: usize,
    rng: &mut R,
) -> Vec<Match> {
    let mut ids: Vec<String> = participants.iter().map(|t| t.id.clone()).collect();
    pad_with_ghosts(&mut ids);

    let mut matches = Vec::new();

    for pass in 0..passes {
        let mut current = ids.clone();
        current.shuffle(rng);

        for (block_index, block) in current.chunks(4).enumerate() {
            if block.iter().any(|id| is_synthetic_id(id)) {
                continue;
            }
            emit_block_matches(&mut matches, block, pass, block_index * 4);
        }
    }

    matches.sort_by_key(|m| m.round);
    info!(
        "Generated {} Americano matches over {} passes for {} players",
        matches.len(),
        passes,
        participants.len()
    );
    matches
}

fn pad_with_ghosts(ids: &mut Vec<String>) {
    let remainder = ids.len() % 4;
    if remainder != 0 {
        for ghost in 0..(4 - remainder) {
            ids.push(format!("{}{}", GHOST_PREFIX, ghost));
        }
    }
}

fn emit_block_matches(matches: &mut Vec<Match>, block: &[String], pass: usize, offset: usize) {
    for (partition_index, partition) in BLOCK_PARTITIONS.iter().enumerate() {
        let round = (pass * 3 + partition_index + 1) as u32;
        let mut fixture = Match::fixture(
            format!("am-mix{}-g{}-r{}", pass, offset, partition_index + 1),
            MIX_ID.to_string(),
            MIX_ID.to_string(),
            round,
        );
        fixture.players_a = Some(vec![block[partition[0]].clone(), block[partition[1]].clone()]);
        fixture.players_b = Some(vec![block[partition[2]].clone(), block[partition[3]].clone()]);
        matches.push(fixture);
    }
}
