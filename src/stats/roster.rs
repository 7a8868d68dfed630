use std::collections::HashMap;

use crate::domain::{Team, is_synthetic_id};

/// Lookup table resolving roster ids to teams and player names
pub(crate) struct RosterIndex<'a> {
    by_id: HashMap<&'a str, &'a Team>,
}

impl<'a> RosterIndex<'a> {
    pub fn new(teams: &'a [Team]) -> Self {
        Self {
            by_id: teams.iter().map(|t| (t.id.as_str(), t)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a Team> {
        self.by_id.get(id).copied()
    }

    /// Display name for a lineup entry: the referenced team's name, or the
    /// entry itself when it is already a plain player name
    pub fn name_of(&self, id: &str) -> String {
        self.get(id).map(|t| t.name.clone()).unwrap_or_else(|| id.to_string())
    }

    /// Player names fielded by one side: the explicit lineup when present,
    /// else the team's member list, else the team name itself
    pub fn side_players(&self, team_id: &str, lineup: Option<&Vec<String>>) -> Vec<String> {
        if let Some(entries) = lineup {
            if !entries.is_empty() {
                return entries.iter().map(|id| self.name_of(id)).collect();
            }
        }

        match self.get(team_id) {
            Some(team) if !is_synthetic_id(&team.id) => {
                if team.players.is_empty() {
                    vec![team.name.clone()]
                } else {
                    team.players.clone()
                }
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team::new("t1", "Aces", vec!["Ann".into(), "Bob".into()]),
            Team::new("t2", "Carla", vec![]),
        ]
    }

    #[test]
    fn lineup_entries_resolve_through_the_roster() {
        let teams = teams();
        let index = RosterIndex::new(&teams);
        let lineup = vec!["t2".to_string(), "Dana".to_string()];
        assert_eq!(index.side_players("mix", Some(&lineup)), vec!["Carla", "Dana"]);
    }

    #[test]
    fn default_side_falls_back_to_members_then_name() {
        let teams = teams();
        let index = RosterIndex::new(&teams);
        assert_eq!(index.side_players("t1", None), vec!["Ann", "Bob"]);
        assert_eq!(index.side_players("t2", None), vec!["Carla"]);
        assert!(index.side_players("BYE", None).is_empty());
        assert!(index.side_players("missing", None).is_empty());
    }
}
