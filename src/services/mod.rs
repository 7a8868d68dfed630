pub mod report;
pub mod tournament;

pub use tournament::TournamentService;
