use glam::Vec3;

use crate::combat::{Combatant, apply_damage};
use crate::enemy::EnemyRoster;
use crate::event::EventQueue;
use crate::player::Player;
use crate::session::MatchContext;

use super::{Bullet, BulletId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectileReport {
    pub player_hits: u32,
    pub enemy_hits: u32,
    pub expired: u32,
}

#[derive(Debug, Default)]
pub struct ProjectileSystem {
    bullets: Vec<Bullet>,
    next_id: u64,
}

impl ProjectileSystem {
    pub const PLAYER_HIT_RADIUS: f32 = 0.8;
    pub const ENEMY_HIT_RADIUS: f32 = 1.2;
    pub const MAX_DISTANCE: f32 = 150.0;
    pub const FLOOR_Y: f32 = -5.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, position: Vec3, velocity: Vec3, from_enemy: bool, damage: i32) -> BulletId {
        let id = BulletId(self.next_id);
        self.next_id += 1;
        self.bullets.push(Bullet {
            id,
            position,
            velocity,
            from_enemy,
            damage,
        });
        id
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn get(&self, id: BulletId) -> Option<&Bullet> {
        self.bullets.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }

    /// Player bullets hit the first targetable enemy in registration order,
    /// not the closest one.
    pub fn tick(
        &mut self,
        dt: f32,
        player: &mut Player,
        enemies: &mut EnemyRoster,
        ctx: &mut MatchContext,
        events: &mut EventQueue,
    ) -> ProjectileReport {
        let mut report = ProjectileReport::default();

        self.bullets.retain_mut(|bullet| {
            if !ctx.is_playing() {
                return true;
            }

            bullet.advance(dt);

            if bullet.from_enemy {
                if bullet.position.distance(player.position()) < Self::PLAYER_HIT_RADIUS {
                    apply_damage(player, bullet.damage, ctx, events);
                    report.player_hits += 1;
                    return false;
                }
            } else if let Some(enemy) = enemies.first_hit(bullet.position, Self::ENEMY_HIT_RADIUS) {
                let outcome = apply_damage(enemy, bullet.damage, ctx, events);
                log::debug!("Bullet {:?} hit enemy {:?}: {:?}", bullet.id, enemy.id(), outcome);
                ctx.record_hit();
                report.enemy_hits += 1;
                return false;
            }

            if bullet.is_out_of_bounds(Self::MAX_DISTANCE, Self::FLOOR_Y) {
                report.expired += 1;
                return false;
            }
            true
        });

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{EnemyConfig, EnemyKind};
    use crate::player::PlayerConfig;
    use crate::session::StartOptions;

    struct Fixture {
        projectiles: ProjectileSystem,
        player: Player,
        enemies: EnemyRoster,
        ctx: MatchContext,
        events: EventQueue,
    }

    impl Fixture {
        fn new() -> Self {
            let mut ctx = MatchContext::new(8);
            let mut events = EventQueue::default();
            ctx.start(StartOptions::default(), &mut events).unwrap();
            Self {
                projectiles: ProjectileSystem::new(),
                player: Player::new(&PlayerConfig::default(), Vec3::new(0.0, 2.1, 0.0)),
                enemies: EnemyRoster::new(),
                ctx,
                events,
            }
        }

        fn tick(&mut self, dt: f32) -> ProjectileReport {
            self.projectiles.tick(
                dt,
                &mut self.player,
                &mut self.enemies,
                &mut self.ctx,
                &mut self.events,
            )
        }
    }

    #[test]
    fn enemy_bullet_damages_player() {
        let mut f = Fixture::new();
        f.projectiles
            .spawn(Vec3::new(0.0, 2.1, -1.0), Vec3::new(0.0, 0.0, 45.0), true, 20);

        let report = f.tick(1.0 / 60.0);

        assert_eq!(report.player_hits, 1);
        assert_eq!(f.player.health().current(), 80);
        assert!(f.projectiles.is_empty());
    }

    #[test]
    fn player_bullet_hits_first_registered_enemy() {
        let mut f = Fixture::new();
        let config = EnemyConfig::default();
        let first = f.enemies.spawn(EnemyKind::Gun, Vec3::new(0.5, 0.0, -10.0), &config);
        let second = f.enemies.spawn(EnemyKind::Gun, Vec3::new(-0.5, 0.0, -10.0), &config);

        f.projectiles
            .spawn(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, false, 28);
        f.tick(1.0 / 60.0);

        assert_eq!(f.enemies.get(first).unwrap().health().current(), 72);
        assert_eq!(f.enemies.get(second).unwrap().health().current(), 100);
        assert_eq!(f.ctx.kills(), 0);
    }

    #[test]
    fn stray_bullets_expire() {
        let mut f = Fixture::new();
        f.projectiles
            .spawn(Vec3::new(0.0, 2.0, -140.0), Vec3::new(0.0, 0.0, -80.0), false, 35);
        f.projectiles
            .spawn(Vec3::new(50.0, -4.0, 0.0), Vec3::new(0.0, -80.0, 0.0), true, 20);

        let report = f.tick(0.2);

        assert_eq!(report.expired, 2);
        assert!(f.projectiles.is_empty());
    }

    #[test]
    fn bullets_freeze_outside_playing() {
        let mut f = Fixture::new();
        f.ctx.player_killed(&mut f.events);
        let id = f
            .projectiles
            .spawn(Vec3::ZERO, Vec3::new(0.0, 0.0, -80.0), false, 35);

        f.tick(0.1);

        assert_eq!(f.projectiles.get(id).unwrap().position, Vec3::ZERO);
    }
}
