use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arena::MatchConfig;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub ticks: u64,
    pub fps: u32,
    pub infinite_lives: bool,
    pub player_name: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 60 * 180,
            fps: 60,
            infinite_lives: false,
            player_name: "bot".to_string(),
        }
    }
}

impl RunConfig {
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}

pub fn load_match_config(path: &Path) -> Result<MatchConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading match config {}", path.display()))?;
    let config: MatchConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing match config {}", path.display()))?;
    Ok(config)
}
