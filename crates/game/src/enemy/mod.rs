mod ai;
mod config;
mod cover;
mod roster;
mod state;

pub use ai::{EnemyAction, EnemyController, Perception};
pub use config::EnemyConfig;
pub use cover::{cover_candidates, select_cover};
pub use roster::EnemyRoster;
pub use state::{Enemy, EnemyId, EnemyKind};
