use glam::Vec3;
use rand::Rng;

use crate::combat::Combatant;
use crate::geometry::ColliderSet;

use super::state::flat_distance;
use super::{Enemy, EnemyConfig, EnemyKind, select_cover};

#[derive(Debug, Clone, Copy)]
pub struct Perception {
    pub player: Vec3,
    pub living_enemies: usize,
    pub now: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyAction {
    Melee { damage: i32 },
    Fire { origin: Vec3, velocity: Vec3, damage: i32 },
}

pub struct EnemyController {
    config: EnemyConfig,
}

impl Default for EnemyController {
    fn default() -> Self {
        Self::new(EnemyConfig::default())
    }
}

impl EnemyController {
    pub fn new(config: EnemyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn update<R: Rng>(
        &self,
        enemy: &mut Enemy,
        perception: &Perception,
        colliders: &ColliderSet,
        rng: &mut R,
        dt: f32,
    ) -> Option<EnemyAction> {
        if !enemy.is_targetable() {
            enemy.moving = false;
            return None;
        }

        let offset = perception.player - enemy.position;
        let flat = Vec3::new(offset.x, 0.0, offset.z);
        let distance = flat.length();
        let heading = flat.normalize_or_zero();
        if heading != Vec3::ZERO {
            enemy.rotation = heading.x.atan2(heading.z);
        }

        if self.is_penetrating(colliders, enemy.position) {
            let push = heading * self.config.move_speed * dt;
            enemy.position += push;
            enemy.moving = push != Vec3::ZERO;
        } else {
            let step = match enemy.kind() {
                EnemyKind::Knife => self.knife_step(enemy, heading, distance, perception.now, dt),
                EnemyKind::Gun => self.gun_step(enemy, heading, distance, perception, colliders, dt),
            };
            enemy.moving = self.try_move(enemy, step, colliders);
        }

        match enemy.kind() {
            EnemyKind::Knife => self.knife_attack(enemy, distance, perception.now),
            EnemyKind::Gun => self.gun_attack(enemy, distance, perception, rng),
        }
    }

    fn knife_step(&self, enemy: &Enemy, heading: Vec3, distance: f32, now: f64, dt: f32) -> Vec3 {
        if distance <= self.config.knife_close_range || distance >= self.config.engage_range {
            return Vec3::ZERO;
        }

        let lateral = Vec3::new(-heading.z, 0.0, heading.x);
        let sway = (now as f32 * self.config.flank_frequency + enemy.flank_phase).sin();
        let direction = (heading + lateral * sway * self.config.flank_amplitude).normalize_or_zero();
        direction * self.config.move_speed * dt
    }

    fn gun_step(
        &self,
        enemy: &mut Enemy,
        heading: Vec3,
        distance: f32,
        perception: &Perception,
        colliders: &ColliderSet,
        dt: f32,
    ) -> Vec3 {
        let stride = self.config.move_speed * dt;

        if self.wants_cover(enemy, perception) {
            self.refresh_cover(enemy, perception, colliders);
            if let Some(target) = enemy.cover_target {
                let remaining = flat_distance(enemy.position, target);
                if remaining <= self.config.cover_arrival {
                    return Vec3::ZERO;
                }
                let toward = Vec3::new(target.x - enemy.position.x, 0.0, target.z - enemy.position.z);
                return toward.normalize_or_zero() * stride.min(remaining);
            }
        } else {
            enemy.cover_target = None;
        }

        if distance < self.config.gun_retreat_range {
            -heading * stride
        } else if distance > self.config.gun_optimal_range && distance < self.config.engage_range {
            heading * stride
        } else {
            Vec3::ZERO
        }
    }

    fn wants_cover(&self, enemy: &Enemy, perception: &Perception) -> bool {
        perception.living_enemies == 1 && enemy.health().fraction() < self.config.cover_health_fraction
    }

    fn refresh_cover(&self, enemy: &mut Enemy, perception: &Perception, colliders: &ColliderSet) {
        let fresh = enemy
            .cover_evaluated_at
            .is_some_and(|at| perception.now - at < self.config.cover_refresh);
        if fresh {
            return;
        }

        enemy.cover_target = select_cover(colliders, enemy.position, perception.player, &self.config);
        enemy.cover_evaluated_at = Some(perception.now);
        log::debug!("Enemy {:?} cover target {:?}", enemy.id(), enemy.cover_target);
    }

    fn try_move(&self, enemy: &mut Enemy, step: Vec3, colliders: &ColliderSet) -> bool {
        let start = enemy.position;
        for axis in [Vec3::new(step.x, 0.0, 0.0), Vec3::new(0.0, 0.0, step.z)] {
            if axis == Vec3::ZERO {
                continue;
            }
            let destination = enemy.position + axis;
            if !self.is_blocked(colliders, destination) {
                enemy.position = destination;
            }
        }
        enemy.position != start
    }

    fn is_blocked(&self, colliders: &ColliderSet, point: Vec3) -> bool {
        colliders.intersects_sphere(point, self.config.collision_radius)
            || self.is_penetrating(colliders, point)
    }

    fn is_penetrating(&self, colliders: &ColliderSet, point: Vec3) -> bool {
        colliders
            .boxes()
            .iter()
            .any(|aabb| flat_distance(aabb.center(), point) < self.config.penetration_distance)
    }

    fn knife_attack(&self, enemy: &mut Enemy, distance: f32, now: f64) -> Option<EnemyAction> {
        if distance >= self.config.knife_attack_range
            || now - enemy.last_attack_at < self.config.knife_cooldown
        {
            return None;
        }
        enemy.last_attack_at = now;
        Some(EnemyAction::Melee {
            damage: self.config.knife_damage,
        })
    }

    fn gun_attack<R: Rng>(
        &self,
        enemy: &mut Enemy,
        distance: f32,
        perception: &Perception,
        rng: &mut R,
    ) -> Option<EnemyAction> {
        if distance <= self.config.gun_min_fire_range || distance >= self.config.engage_range {
            return None;
        }

        let cooldown = if enemy.in_cover(self.config.cover_arrival) {
            self.config.gun_cover_cooldown
        } else {
            self.config.gun_cooldown
        };
        if perception.now - enemy.last_shot_at < cooldown {
            return None;
        }
        enemy.last_shot_at = perception.now;

        let origin = enemy.position + Vec3::Y * self.config.muzzle_height;
        let accuracy = if enemy.moving {
            self.config.accuracy_moving
        } else {
            self.config.accuracy_still
        };
        let spread = 1.0 - accuracy;
        let mut aim = (perception.player - origin).normalize_or_zero();
        if spread > 0.0 {
            aim += Vec3::new(
                rng.gen_range(-spread..=spread),
                rng.gen_range(-spread..=spread),
                rng.gen_range(-spread..=spread),
            );
        }

        Some(EnemyAction::Fire {
            origin,
            velocity: aim.normalize_or_zero() * self.config.bullet_speed,
            damage: self.config.bullet_damage,
        })
    }
}
