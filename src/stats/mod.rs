pub mod pairs;
pub mod player_rankings;
mod roster;
pub mod score;
pub mod standings;
pub mod streaks;

pub use pairs::calculate_pair_stats;
pub use player_rankings::calculate_player_rankings;
pub use score::{ScoreSummary, Side, resolve_score};
pub use standings::calculate_standings;
pub use streaks::calculate_streaks;
