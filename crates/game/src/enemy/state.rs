use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::combat::{Combatant, Health};
use crate::event::{EventQueue, GameEvent};
use crate::session::MatchContext;
use crate::simulation::Deadline;

use super::EnemyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Knife,
    Gun,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    id: EnemyId,
    kind: EnemyKind,
    pub position: Vec3,
    pub rotation: f32,
    pub moving: bool,
    health: Health,
    death_delay: f64,
    dying: Option<Deadline>,
    pub(super) cover_target: Option<Vec3>,
    pub(super) cover_evaluated_at: Option<f64>,
    pub(super) last_attack_at: f64,
    pub(super) last_shot_at: f64,
    pub(super) flank_phase: f32,
}

impl Enemy {
    pub fn new(id: EnemyId, kind: EnemyKind, position: Vec3, config: &EnemyConfig) -> Self {
        Self {
            id,
            kind,
            position,
            rotation: 0.0,
            moving: false,
            health: Health::new(config.max_health),
            death_delay: config.death_delay,
            dying: None,
            cover_target: None,
            cover_evaluated_at: None,
            last_attack_at: f64::NEG_INFINITY,
            last_shot_at: f64::NEG_INFINITY,
            // Spread the flank sway so a pack doesn't weave in lockstep.
            flank_phase: id.0 as f32 * 1.7,
        }
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn is_dying(&self) -> bool {
        self.dying.is_some()
    }

    pub fn death_deadline(&self) -> Option<Deadline> {
        self.dying
    }

    pub fn cover_target(&self) -> Option<Vec3> {
        self.cover_target
    }

    pub fn in_cover(&self, arrival: f32) -> bool {
        self.cover_target
            .is_some_and(|target| flat_distance(self.position, target) <= arrival)
    }
}

pub(crate) fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    let d = b - a;
    (d.x * d.x + d.z * d.z).sqrt()
}

impl Combatant for Enemy {
    fn health(&self) -> &Health {
        &self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_targetable(&self) -> bool {
        self.health.is_alive() && self.dying.is_none()
    }

    fn hit_event(&self, damage: i32) -> GameEvent {
        GameEvent::EnemyHit {
            enemy: self.id,
            damage,
            remaining: self.health.current(),
        }
    }

    fn on_killed(&mut self, ctx: &mut MatchContext, events: &mut EventQueue) {
        self.dying = Some(Deadline::after(ctx.now(), self.death_delay, ctx.epoch()));
        self.moving = false;
        self.cover_target = None;
        events.push(GameEvent::EnemyKilled { enemy: self.id });
        ctx.register_kill(events);
    }
}
