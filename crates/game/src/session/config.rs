use serde::{Deserialize, Serialize};

use crate::enemy::EnemyConfig;
use crate::event::EventQueue;
use crate::player::PlayerConfig;

use super::GameMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartOptions {
    pub infinite_lives: bool,
    pub mode: GameMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub seed: u64,
    pub enemy_count: usize,
    pub event_capacity: usize,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            enemy_count: 8,
            event_capacity: EventQueue::DEFAULT_CAPACITY,
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
