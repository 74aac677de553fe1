mod config;
mod leaderboard;
mod phase;

pub use config::{MatchConfig, StartOptions};
pub use leaderboard::{Leaderboard, ScoreEntry};
pub use phase::{GameMode, MatchContext, MatchPhase, PhaseError};
