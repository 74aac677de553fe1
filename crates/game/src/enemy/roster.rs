use glam::Vec3;

use crate::combat::Combatant;
use crate::event::{EventQueue, GameEvent};
use crate::session::MatchContext;
use crate::simulation::DeadlineStatus;

use super::{Enemy, EnemyConfig, EnemyId, EnemyKind};

#[derive(Debug, Default)]
pub struct EnemyRoster {
    enemies: Vec<Enemy>,
    next_id: u32,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, kind: EnemyKind, position: Vec3, config: &EnemyConfig) -> EnemyId {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        self.enemies.push(Enemy::new(id, kind, position, config));
        log::debug!("Spawned {:?} enemy {:?} at {:?}", kind, id, position);
        id
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
        self.next_id = 0;
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.enemies.iter_mut()
    }

    pub fn targetable(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_targetable())
    }

    pub fn living_count(&self) -> usize {
        self.targetable().count()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn first_hit(&mut self, point: Vec3, radius: f32) -> Option<&mut Enemy> {
        self.enemies
            .iter_mut()
            .find(|e| e.is_targetable() && e.position.distance(point) < radius)
    }

    pub fn nearest_targetable(&self, point: Vec3) -> Option<&Enemy> {
        self.targetable().min_by(|a, b| {
            a.position
                .distance_squared(point)
                .total_cmp(&b.position.distance_squared(point))
        })
    }

    pub fn reap(&mut self, ctx: &MatchContext, events: &mut EventQueue) -> Vec<EnemyId> {
        let mut removed = Vec::new();
        self.enemies.retain(|enemy| {
            let due = enemy
                .death_deadline()
                .is_some_and(|d| d.poll(ctx.now(), ctx.epoch()) == DeadlineStatus::Due);
            if due {
                removed.push(enemy.id());
            }
            !due
        });

        for &enemy in &removed {
            log::debug!("Removed enemy {:?}", enemy);
            events.push(GameEvent::EnemyRemoved { enemy });
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::apply_damage;
    use crate::session::StartOptions;

    #[test]
    fn dead_enemy_removed_after_delay() {
        let config = EnemyConfig::default();
        let mut ctx = MatchContext::new(8);
        let mut events = EventQueue::default();
        ctx.start(StartOptions::default(), &mut events).unwrap();

        let mut roster = EnemyRoster::new();
        let id = roster.spawn(EnemyKind::Knife, Vec3::new(3.0, 0.0, 0.0), &config);
        roster.spawn(EnemyKind::Gun, Vec3::new(-3.0, 0.0, 0.0), &config);

        ctx.set_now(10.0);
        let enemy = roster.get_mut(id).unwrap();
        apply_damage(enemy, 100, &mut ctx, &mut events);

        assert_eq!(roster.living_count(), 1);
        assert!(roster.first_hit(Vec3::new(3.0, 0.0, 0.0), 1.2).is_none());

        ctx.set_now(11.9);
        assert!(roster.reap(&ctx, &mut events).is_empty());
        assert_eq!(roster.len(), 2);

        ctx.set_now(12.0);
        assert_eq!(roster.reap(&ctx, &mut events), vec![id]);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn nearest_skips_dying() {
        let config = EnemyConfig::default();
        let mut roster = EnemyRoster::new();
        let near = roster.spawn(EnemyKind::Gun, Vec3::new(1.0, 0.0, 0.0), &config);
        let far = roster.spawn(EnemyKind::Gun, Vec3::new(9.0, 0.0, 0.0), &config);

        assert_eq!(roster.nearest_targetable(Vec3::ZERO).unwrap().id(), near);

        let mut ctx = MatchContext::new(8);
        let mut events = EventQueue::default();
        apply_damage(roster.get_mut(near).unwrap(), 100, &mut ctx, &mut events);

        assert_eq!(roster.nearest_targetable(Vec3::ZERO).unwrap().id(), far);
    }
}
