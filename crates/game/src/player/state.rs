use glam::Vec3;

use crate::combat::{Combatant, Health};
use crate::event::{EventQueue, GameEvent};
use crate::session::MatchContext;

use super::{Arsenal, CameraRig, PlayerConfig};

#[derive(Debug, Clone)]
pub struct Player {
    /// Eye point; feet sit `eye_height` below.
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    pub moving: bool,
    pub rotation: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub arsenal: Arsenal,
    pub camera: CameraRig,
    health: Health,
}

impl Player {
    pub fn new(config: &PlayerConfig, spawn: Vec3) -> Self {
        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            grounded: true,
            moving: false,
            rotation: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            arsenal: Arsenal::new(),
            camera: CameraRig::default(),
            health: Health::new(config.max_health),
        }
    }

    pub fn respawn(&mut self, config: &PlayerConfig, spawn: Vec3) {
        *self = Self::new(config, spawn);
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }
}

impl Combatant for Player {
    fn health(&self) -> &Health {
        &self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn absorbs_damage(&self, ctx: &MatchContext) -> bool {
        ctx.infinite_lives()
    }

    fn hit_event(&self, damage: i32) -> GameEvent {
        GameEvent::PlayerHit {
            damage,
            remaining: self.health.current(),
        }
    }

    fn on_killed(&mut self, ctx: &mut MatchContext, events: &mut EventQueue) {
        log::info!("Player killed");
        ctx.player_killed(events);
    }
}
