use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;

use crate::config::AppConfig;
use crate::domain::{
    Match, MatchScore, Mode, PairStats, PlayerStats, PlayoffSlot, Streak, Team, TeamStats,
    TournamentArchive, TournamentConfig,
};
use crate::schedule::{generate_americano, generate_playoffs, generate_round_robin};
use crate::stats::score::{Side, resolve_score};
use crate::stats::{
    calculate_pair_stats, calculate_player_rankings, calculate_standings, calculate_streaks,
};

/// Minimum Americano roster: one complete foursome
const MIN_AMERICANO_PLAYERS: usize = 4;

/// Owns a tournament's roster and match list, and drives the flow around the
/// pure scheduling and statistics functions: recording results, advancing
/// playoff winners and appending the bracket once the regular season is done.
///
/// Every analytics accessor recomputes its view wholesale from the current
/// match list; nothing is cached or incrementally patched.
pub struct TournamentService {
    config: TournamentConfig,
    settings: AppConfig,
    teams: Vec<Team>,
    matches: Vec<Match>,
}

impl TournamentService {
    /// Create a tournament and generate its initial schedule, shuffling
    /// Americano blocks from system entropy.
    pub fn new(config: TournamentConfig, teams: Vec<Team>) -> Result<Self> {
        Self::with_rng(config, teams, &mut rand::thread_rng())
    }

    /// As [`TournamentService::new`], with an injected randomness source so
    /// Americano schedules are reproducible.
    pub fn with_rng<R: Rng + ?Sized>(
        config: TournamentConfig,
        teams: Vec<Team>,
        rng: &mut R,
    ) -> Result<Self> {
        let settings = AppConfig::new();

        let matches = match config.mode {
            Mode::Americano => {
                if teams.len() < MIN_AMERICANO_PLAYERS {
                    bail!(
                        "Americano needs at least {} players, got {}",
                        MIN_AMERICANO_PLAYERS,
                        teams.len()
                    );
                }
                generate_americano(&teams, settings.schedule.mixing_passes, rng)
            }
            Mode::Singles | Mode::Doubles => generate_round_robin(&teams, config.double_round),
        };

        info!(
            "Tournament '{}' set up with {} entries and {} fixtures",
            config.name,
            teams.len(),
            matches.len()
        );

        Ok(Self {
            config,
            settings,
            teams,
            matches,
        })
    }

    /// Rebuild a service around an archived tournament state.
    pub fn from_archive(archive: TournamentArchive) -> Self {
        Self {
            config: archive.config,
            settings: AppConfig::new(),
            teams: archive.teams,
            matches: archive.matches,
        }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Record a played result.
    ///
    /// Resolves the winning side for team formats, advances a playoff winner
    /// into the linked next bracket match, and appends the playoff bracket
    /// once every regular-season match is played.
    pub fn record_result(
        &mut self,
        match_id: &str,
        score: MatchScore,
        lineups: Option<(Vec<String>, Vec<String>)>,
        date: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let position = self
            .matches
            .iter()
            .position(|m| m.id == match_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown match id: {}", match_id))?;

        let winner = self.resolve_winner(&self.matches[position], &score);

        let m = &mut self.matches[position];
        if let Some((players_a, players_b)) = lineups {
            m.players_a = Some(players_a);
            m.players_b = Some(players_b);
        }
        m.score = Some(score);
        m.played = true;
        m.winner_id = winner.clone();
        if date.is_some() {
            m.date = date;
        }

        let recorded = &self.matches[position];
        if recorded.is_playoff {
            if let (Some(next_id), Some(slot), Some(winner_id)) =
                (recorded.next_match_id.clone(), recorded.next_match_slot, winner)
            {
                self.advance_winner(&next_id, slot, winner_id);
            }
        }

        self.maybe_generate_playoffs();
        Ok(())
    }

    fn resolve_winner(&self, m: &Match, score: &MatchScore) -> Option<String> {
        if self.config.mode == Mode::Americano {
            return None;
        }
        match resolve_score(score).winner()? {
            Side::A => Some(m.team_a_id.clone()),
            Side::B => Some(m.team_b_id.clone()),
        }
    }

    fn advance_winner(&mut self, next_match_id: &str, slot: PlayoffSlot, winner_id: String) {
        if let Some(next) = self.matches.iter_mut().find(|m| m.id == next_match_id) {
            info!("Advancing {} into {} slot {:?}", winner_id, next.id, slot);
            match slot {
                PlayoffSlot::A => next.team_a_id = winner_id,
                PlayoffSlot::B => next.team_b_id = winner_id,
            }
        }
    }

    /// Append bracket matches exactly once: when playoffs are configured,
    /// every regular-season match is played and no playoff match exists yet.
    fn maybe_generate_playoffs(&mut self) {
        if self.config.mode == Mode::Americano || self.config.playoff_teams == 0 {
            return;
        }
        let regular_done = self
            .matches
            .iter()
            .filter(|m| !m.is_playoff)
            .all(|m| m.played);
        let playoffs_exist = self.matches.iter().any(|m| m.is_playoff);
        if !regular_done || playoffs_exist {
            return;
        }

        let regular: Vec<Match> = self
            .matches
            .iter()
            .filter(|m| !m.is_playoff)
            .cloned()
            .collect();
        let standings = calculate_standings(
            &self.teams,
            &regular,
            self.config.mode,
            &self.settings.ranking,
        );
        let bracket = generate_playoffs(&standings, self.config.playoff_teams);
        if !bracket.is_empty() {
            info!("Regular season complete; appending {} playoff matches", bracket.len());
            self.matches.extend(bracket);
        }
    }

    /// Current team standings, playoff matches included
    pub fn standings(&self) -> Vec<TeamStats> {
        calculate_standings(
            &self.teams,
            &self.matches,
            self.config.mode,
            &self.settings.ranking,
        )
    }

    pub fn player_rankings(&self) -> Vec<PlayerStats> {
        calculate_player_rankings(&self.teams, &self.matches, &self.settings.ranking)
    }

    pub fn streaks(&self) -> Vec<Streak> {
        calculate_streaks(&self.teams, &self.matches, &self.settings.ranking)
    }

    pub fn pair_stats(&self) -> Vec<PairStats> {
        calculate_pair_stats(&self.teams, &self.matches)
    }

    /// Snapshot the whole tournament for archiving
    pub fn snapshot(&self, id: &str) -> TournamentArchive {
        TournamentArchive {
            id: id.to_string(),
            date: Utc::now(),
            name: self.config.name.clone(),
            config: self.config.clone(),
            teams: self.teams.clone(),
            matches: self.matches.clone(),
        }
    }
}
