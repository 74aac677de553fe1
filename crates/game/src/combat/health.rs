use glam::Vec3;

use crate::event::{EventQueue, GameEvent};
use crate::session::MatchContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Ignored,
    Absorbed,
    Damaged { remaining: i32 },
    Killed,
}

impl DamageOutcome {
    pub fn is_kill(self) -> bool {
        matches!(self, Self::Killed)
    }

    pub fn landed(self) -> bool {
        matches!(self, Self::Damaged { .. } | Self::Killed)
    }
}

impl Health {
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }

    /// Clamps into `[0, max]`. A kill is reported only on the hit that crosses to zero.
    pub fn apply(&mut self, amount: i32) -> DamageOutcome {
        if self.current == 0 {
            return DamageOutcome::Ignored;
        }

        self.current = self.current.saturating_sub(amount).clamp(0, self.max);
        if self.current == 0 {
            DamageOutcome::Killed
        } else {
            DamageOutcome::Damaged {
                remaining: self.current,
            }
        }
    }
}

pub trait Combatant {
    fn health(&self) -> &Health;

    fn health_mut(&mut self) -> &mut Health;

    fn position(&self) -> Vec3;

    fn is_targetable(&self) -> bool {
        self.health().is_alive()
    }

    fn absorbs_damage(&self, _ctx: &MatchContext) -> bool {
        false
    }

    fn hit_event(&self, damage: i32) -> GameEvent;

    fn on_killed(&mut self, ctx: &mut MatchContext, events: &mut EventQueue);
}

pub fn apply_damage<C: Combatant + ?Sized>(
    entity: &mut C,
    amount: i32,
    ctx: &mut MatchContext,
    events: &mut EventQueue,
) -> DamageOutcome {
    if entity.absorbs_damage(ctx) {
        return DamageOutcome::Absorbed;
    }

    let outcome = entity.health_mut().apply(amount);
    if outcome.landed() {
        events.push(entity.hit_event(amount));
    }
    if outcome.is_kill() {
        entity.on_killed(ctx, events);
    }
    outcome
}
