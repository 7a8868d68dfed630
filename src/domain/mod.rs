pub mod models;

pub use models::{
    BYE_ID, GHOST_PREFIX, MIX_ID, Match, MatchOutcome, MatchScore, Mode, PairStats, PlayerStats,
    PlayoffSlot, SetScore, Streak, Team, TeamStats, TournamentArchive, TournamentConfig,
    is_synthetic_id,
};
