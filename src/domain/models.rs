use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Synthetic participant absorbing the odd slot in a round robin.
pub const BYE_ID: &str = "BYE";
/// Prefix for synthetic Americano padding participants.
pub const GHOST_PREFIX: &str = "GHOST-";
/// Shared side sentinel for Americano matches, where only lineups matter.
pub const MIX_ID: &str = "mix";

/// Tournament format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Singles,
    Doubles,
    Americano,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentConfig {
    pub name: String,
    pub mode: Mode,
    /// Play a mirrored second leg (round robin only)
    pub double_round: bool,
    /// 0 = none, 2 or 4 = bracket size, -1 = largest power of two that fits
    pub playoff_teams: i32,
}

/// Roster entry: a team for Singles/Doubles, an individual for Americano
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Member player names (1 for singles, 2 for doubles, 1 per Americano entry)
    pub players: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain: Option<String>,
}

impl Team {
    pub fn new(id: &str, name: &str, players: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            players,
            captain: None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        is_synthetic_id(&self.id)
    }
}

pub fn is_synthetic_id(id: &str) -> bool {
    id == BYE_ID || id.starts_with(GHOST_PREFIX)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub a: u32,
    pub b: u32,
}

impl SetScore {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }
}

/// Best-of-three set score; set 3 is a tie-break or an unplayed set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub set1: SetScore,
    pub set2: SetScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set3: Option<SetScore>,
}

impl MatchScore {
    pub fn new(set1: SetScore, set2: SetScore, set3: Option<SetScore>) -> Self {
        Self { set1, set2, set3 }
    }
}

/// Which slot of the next bracket match a playoff winner advances into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayoffSlot {
    A,
    B,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub team_a_id: String,
    pub team_b_id: String,
    /// Explicit lineup fielded by side A (always set for Americano)
    #[serde(rename = "playersAIds", default, skip_serializing_if = "Option::is_none")]
    pub players_a: Option<Vec<String>>,
    #[serde(rename = "playersBIds", default, skip_serializing_if = "Option::is_none")]
    pub players_b: Option<Vec<String>>,
    pub round: u32,
    pub score: Option<MatchScore>,
    pub played: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<String>,
    #[serde(default)]
    pub is_playoff: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_slot: Option<PlayoffSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
}

impl Match {
    /// An unplayed fixture between two concrete sides
    pub fn fixture(id: String, team_a_id: String, team_b_id: String, round: u32) -> Self {
        Self {
            id,
            team_a_id,
            team_b_id,
            players_a: None,
            players_b: None,
            round,
            score: None,
            played: false,
            winner_id: None,
            is_playoff: false,
            playoff_label: None,
            next_match_id: None,
            next_match_slot: None,
            date: None,
            court: None,
        }
    }
}

/// Per-team standings row, recomputed wholesale from the match list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub team_id: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    /// 3 per win
    pub points: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub win_rate: f64,
}

impl TeamStats {
    pub fn zeroed(team_id: &str) -> Self {
        Self {
            team_id: team_id.to_string(),
            played: 0,
            won: 0,
            lost: 0,
            points: 0,
            sets_won: 0,
            sets_lost: 0,
            games_won: 0,
            games_lost: 0,
            win_rate: 0.0,
        }
    }

    pub fn game_diff(&self) -> i64 {
        self.games_won as i64 - self.games_lost as i64
    }
}

/// Per-player aggregate with proportional metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
    /// Percentage in [0, 100]
    pub win_rate: f64,
    pub avg_set_diff: f64,
    pub avg_game_diff: f64,
}

impl PlayerStats {
    pub fn zeroed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            played: 0,
            won: 0,
            lost: 0,
            sets_won: 0,
            sets_lost: 0,
            games_won: 0,
            games_lost: 0,
            win_rate: 0.0,
            avg_set_diff: 0.0,
            avg_game_diff: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    W,
    L,
}

/// Win/loss streak state for one player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub name: String,
    /// Positive = consecutive wins, negative = consecutive losses
    pub current: i32,
    pub max_win: u32,
    pub max_loss: u32,
    /// Most recent results, oldest first, capped length 5
    pub recent: Vec<MatchOutcome>,
}

impl Streak {
    pub fn neutral(name: &str) -> Self {
        Self {
            name: name.to_string(),
            current: 0,
            max_win: 0,
            max_loss: 0,
            recent: Vec::new(),
        }
    }
}

/// Win rate of an unordered two-player partnership
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairStats {
    pub p1: String,
    pub p2: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub win_rate: f64,
}

/// Saved snapshot of a complete tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentArchive {
    pub id: String,
    pub date: DateTime<Utc>,
    pub name: String,
    pub config: TournamentConfig,
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
}
