use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TournamentArchive;

/// File-based archive of completed tournaments, one pretty-printed JSON
/// snapshot per tournament id.
pub struct ArchiveStore {
    archive_dir: PathBuf,
}

impl ArchiveStore {
    pub fn new<P: AsRef<Path>>(archive_dir: P) -> Result<Self> {
        let archive_dir = archive_dir.as_ref().to_path_buf();
        fs::create_dir_all(&archive_dir).context("Failed to create archive directory")?;
        Ok(Self { archive_dir })
    }

    /// Save a tournament snapshot, overwriting any previous one with the same id
    pub fn save(&self, archive: &TournamentArchive) -> Result<()> {
        let file_path = self.path_for(&archive.id);
        let json =
            serde_json::to_string_pretty(archive).context("Failed to serialize tournament")?;
        fs::write(&file_path, json).context("Failed to write archive file")?;

        info!("Archived tournament '{}' to {}", archive.name, file_path.display());
        Ok(())
    }

    pub fn load(&self, id: &str) -> Result<Option<TournamentArchive>> {
        let file_path = self.path_for(id);
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).context("Failed to read archive file")?;
        let archive = serde_json::from_str(&json).context("Failed to parse archive file")?;
        Ok(Some(archive))
    }

    /// All stored snapshots, most recent first
    pub fn list(&self) -> Result<Vec<TournamentArchive>> {
        let mut archives = Vec::new();

        for entry in fs::read_dir(&self.archive_dir).context("Failed to read archive directory")? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                archives.push(
                    serde_json::from_str(&json)
                        .with_context(|| format!("Failed to parse {}", path.display()))?,
                );
            }
        }

        archives.sort_by(|a: &TournamentArchive, b: &TournamentArchive| b.date.cmp(&a.date));
        Ok(archives)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let file_path = self.path_for(id);
        if file_path.exists() {
            fs::remove_file(&file_path).context("Failed to delete archive file")?;
            info!("Deleted archived tournament {}", id);
        }
        Ok(())
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.archive_dir.join(format!("{}.json", id))
    }
}

/// Load a single tournament snapshot straight from a JSON file
pub fn load_archive_file<P: AsRef<Path>>(path: P) -> Result<TournamentArchive> {
    let json = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    serde_json::from_str(&json).context("Failed to parse tournament file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::domain::{Mode, Team, TournamentConfig};

    fn archive(id: &str) -> TournamentArchive {
        TournamentArchive {
            id: id.to_string(),
            date: Utc::now(),
            name: format!("Cup {}", id),
            config: TournamentConfig {
                name: format!("Cup {}", id),
                mode: Mode::Doubles,
                double_round: false,
                playoff_teams: 4,
            },
            teams: vec![Team::new("t1", "Aces", vec!["Ann".into(), "Bob".into()])],
            matches: Vec::new(),
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        store.save(&archive("spring")).unwrap();
        let loaded = store.load("spring").unwrap().unwrap();
        assert_eq!(loaded.name, "Cup spring");
        assert_eq!(loaded.teams.len(), 1);
        assert_eq!(loaded.config.playoff_teams, 4);
    }

    #[test]
    fn missing_archive_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();
        assert!(store.load("nothing").unwrap().is_none());
    }

    #[test]
    fn list_returns_most_recent_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        let mut older = archive("older");
        older.date = Utc::now() - Duration::days(30);
        store.save(&older).unwrap();
        store.save(&archive("newer")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "newer");
    }

    #[test]
    fn delete_removes_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        store.save(&archive("gone")).unwrap();
        store.delete("gone").unwrap();
        assert!(store.load("gone").unwrap().is_none());
        // deleting again is a no-op
        store.delete("gone").unwrap();
    }
}
