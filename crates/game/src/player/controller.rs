use glam::Vec3;

use crate::event::{EventQueue, GameEvent};
use crate::geometry::ColliderSet;
use crate::projectile::ProjectileSystem;
use crate::session::MatchContext;

use super::{FireOutcome, InputFlags, Player, PlayerConfig, PlayerInput, ground_basis, view_direction};

pub struct PlayerController {
    config: PlayerConfig,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl PlayerController {
    pub fn new(config: PlayerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        input: &PlayerInput,
        player: &mut Player,
        colliders: &ColliderSet,
        projectiles: &mut ProjectileSystem,
        ctx: &mut MatchContext,
        events: &mut EventQueue,
        dt: f32,
    ) {
        player.yaw = input.yaw;
        player.pitch = input.pitch.clamp(-self.config.max_pitch, self.config.max_pitch);

        self.apply_actions(input, player, ctx, events);
        self.tick_reload(player, ctx, events);

        self.move_horizontal(input, player, colliders, dt);
        self.move_vertical(input, player, colliders, dt);

        if input.is_held(InputFlags::FIRE) {
            self.fire(player, projectiles, ctx, events);
        }

        let scope = player.arsenal.scope();
        player.camera.ease_fov(scope, self.config.fov_sharpness, dt);
    }

    fn apply_actions(
        &self,
        input: &PlayerInput,
        player: &mut Player,
        ctx: &MatchContext,
        events: &mut EventQueue,
    ) {
        if let Some(weapon) = input.select_weapon {
            let had_scope = player.arsenal.scope();
            if player.arsenal.select(weapon) {
                log::debug!("Switched to {}", weapon.name());
                events.push(GameEvent::WeaponSwitched { weapon });
                if had_scope != player.arsenal.scope() {
                    events.push(GameEvent::ScopeChanged { scope: None });
                }
            }
        }

        if input.cycle_camera {
            let view = player.camera.cycle();
            log::debug!("Camera view changed to {:?}", view);
            events.push(GameEvent::CameraViewChanged { view });
            if player.arsenal.clear_scope() {
                events.push(GameEvent::ScopeChanged { scope: None });
            }
        }

        let view = player.camera.view();
        if input.toggle_scope {
            match player.arsenal.toggle_scope(view) {
                Ok(scope) => {
                    events.push(GameEvent::ScopeChanged { scope });
                }
                Err(err) => log::warn!("Scope toggle rejected: {}", err),
            }
        }
        if let Some(scope) = input.select_scope {
            match player.arsenal.select_scope(scope, view) {
                Ok(()) => {
                    events.push(GameEvent::ScopeChanged { scope: Some(scope) });
                }
                Err(err) => log::warn!("Scope selection rejected: {}", err),
            }
        }

        if input.reload {
            if let Some(weapon) = player.arsenal.start_reload(ctx.now(), ctx.epoch()) {
                log::debug!("Reloading {}", weapon.name());
                events.push(GameEvent::ReloadStarted { weapon });
            }
        }
    }

    fn tick_reload(&self, player: &mut Player, ctx: &MatchContext, events: &mut EventQueue) {
        if let Some((weapon, ammo)) = player.arsenal.poll_reload(ctx.now(), ctx.epoch()) {
            log::info!("{} reloaded: {} rounds", weapon.name(), ammo);
            events.push(GameEvent::ReloadCompleted { weapon, ammo });
        }
    }

    fn move_horizontal(&self, input: &PlayerInput, player: &mut Player, colliders: &ColliderSet, dt: f32) {
        let heading = if player.camera.view().uses_orbit() {
            input.orbit_azimuth
        } else {
            input.yaw
        };
        let (forward, right) = ground_basis(heading);
        let (strafe, advance) = input.move_axes();
        let direction = (forward * advance + right * strafe).normalize_or_zero();

        if direction == Vec3::ZERO {
            player.velocity.x = 0.0;
            player.velocity.z = 0.0;
            player.moving = false;
            return;
        }

        let speed = if input.is_held(InputFlags::RUN) {
            self.config.run_speed
        } else {
            self.config.walk_speed
        };
        player.velocity.x = direction.x * speed;
        player.velocity.z = direction.z * speed;
        player.rotation = direction.x.atan2(direction.z);

        let start = player.position;
        let radius = self.config.collision_radius;

        // Axes resolve independently so a blocked axis still lets the other slide.
        let step_x = Vec3::new(player.position.x + player.velocity.x * dt, player.position.y, player.position.z);
        if !colliders.intersects_sphere(step_x, radius) {
            player.position.x = step_x.x;
        }
        let step_z = Vec3::new(player.position.x, player.position.y, player.position.z + player.velocity.z * dt);
        if !colliders.intersects_sphere(step_z, radius) {
            player.position.z = step_z.z;
        }

        player.moving = player.position != start;
    }

    fn move_vertical(&self, input: &PlayerInput, player: &mut Player, colliders: &ColliderSet, dt: f32) {
        if input.is_held(InputFlags::JUMP) && player.grounded {
            player.velocity.y = self.config.jump_speed;
            player.grounded = false;
        }

        player.velocity.y -= self.config.gravity * dt;
        let target_y = player.position.y + player.velocity.y * dt;

        let floor = colliders.ground_height_at(
            player.position.x,
            player.position.z,
            self.config.ground_probe_radius,
        ) + self.config.eye_height;

        if target_y <= floor {
            player.position.y = floor;
            player.velocity.y = 0.0;
            player.grounded = true;
            return;
        }

        let probe = Vec3::new(player.position.x, target_y, player.position.z);
        if player.velocity.y > 0.0 && colliders.intersects_sphere(probe, self.config.collision_radius) {
            player.velocity.y = 0.0;
        } else {
            player.position.y = target_y;
        }
        player.grounded = false;
    }

    fn fire(
        &self,
        player: &mut Player,
        projectiles: &mut ProjectileSystem,
        ctx: &mut MatchContext,
        events: &mut EventQueue,
    ) {
        let weapon = player.arsenal.current();
        match player.arsenal.try_fire(ctx.now()) {
            FireOutcome::Fired(spec) => {
                let direction = view_direction(player.yaw, player.pitch);
                let origin = player.position + direction * self.config.muzzle_offset;
                projectiles.spawn(origin, direction * self.config.muzzle_velocity, false, spec.damage);
                ctx.record_shot();
                events.push(GameEvent::ShotFired { weapon });
            }
            FireOutcome::Empty => {
                events.push(GameEvent::WeaponEmpty { weapon });
            }
            FireOutcome::Reloading | FireOutcome::Cooldown => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{ScopeKind, WeaponId};
    use crate::geometry::Aabb;
    use crate::player::CameraView;
    use crate::session::StartOptions;

    struct Rig {
        controller: PlayerController,
        player: Player,
        colliders: ColliderSet,
        projectiles: ProjectileSystem,
        ctx: MatchContext,
        events: EventQueue,
    }

    impl Rig {
        fn new(colliders: ColliderSet) -> Self {
            let mut ctx = MatchContext::new(8);
            let mut events = EventQueue::default();
            ctx.start(StartOptions::default(), &mut events).unwrap();
            let config = PlayerConfig::default();
            Self {
                player: Player::new(&config, Vec3::new(0.0, config.eye_height, 0.0)),
                controller: PlayerController::new(config),
                colliders,
                projectiles: ProjectileSystem::new(),
                ctx,
                events,
            }
        }

        fn step(&mut self, input: &PlayerInput, dt: f32) {
            let now = self.ctx.now() + f64::from(dt);
            self.ctx.set_now(now);
            self.controller.update(
                input,
                &mut self.player,
                &self.colliders,
                &mut self.projectiles,
                &mut self.ctx,
                &mut self.events,
                dt,
            );
        }
    }

    #[test]
    fn walks_forward_along_view() {
        let mut rig = Rig::new(ColliderSet::new());
        let input = PlayerInput::new().holding(InputFlags::FORWARD);

        for _ in 0..60 {
            rig.step(&input, 1.0 / 60.0);
        }

        assert!((rig.player.position.z + 5.0).abs() < 1e-3);
        assert!(rig.player.position.x.abs() < 1e-4);
        assert!(rig.player.grounded);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let mut rig = Rig::new(ColliderSet::new());
        let input = PlayerInput::new().holding(InputFlags::FORWARD | InputFlags::RIGHT | InputFlags::RUN);

        rig.step(&input, 0.1);

        let flat = Vec3::new(rig.player.position.x, 0.0, rig.player.position.z);
        assert!((flat.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn jump_lands_back_on_the_floor() {
        let mut rig = Rig::new(ColliderSet::new());
        rig.step(&PlayerInput::new().holding(InputFlags::JUMP), 1.0 / 60.0);
        assert!(!rig.player.grounded);
        assert!(rig.player.position.y > 2.1);

        for _ in 0..120 {
            rig.step(&PlayerInput::new(), 1.0 / 60.0);
        }
        assert!(rig.player.grounded);
        assert_eq!(rig.player.position.y, 2.1);
    }

    #[test]
    fn wall_blocks_one_axis_only() {
        let wall = Aabb::new(Vec3::new(1.0, 0.0, -10.0), Vec3::new(3.0, 4.0, 10.0));
        let mut rig = Rig::new(ColliderSet::from_boxes(vec![wall]));
        let input = PlayerInput::new().holding(InputFlags::FORWARD | InputFlags::RIGHT);

        for _ in 0..60 {
            rig.step(&input, 1.0 / 60.0);
        }

        assert!(rig.player.position.x < 0.5);
        assert!(rig.player.position.z < -2.0);
        assert_eq!(rig.colliders.max_penetration(rig.player.position, 0.5), 0.0);
    }

    #[test]
    fn fire_spawns_bullet_along_view() {
        let mut rig = Rig::new(ColliderSet::new());
        let input = PlayerInput::new().holding(InputFlags::FIRE);

        rig.step(&input, 1.0 / 60.0);

        assert_eq!(rig.projectiles.len(), 1);
        let bullet = &rig.projectiles.bullets()[0];
        assert!((bullet.position - Vec3::new(0.0, 2.1, -0.5)).length() < 1e-4);
        assert!((bullet.velocity - Vec3::new(0.0, 0.0, -80.0)).length() < 1e-3);
        assert_eq!(bullet.damage, 35);
        assert_eq!(rig.player.arsenal.current_ammo(), 29);
        assert_eq!(rig.ctx.shots_fired(), 1);
    }

    #[test]
    fn camera_change_clears_scope() {
        let mut rig = Rig::new(ColliderSet::new());
        let scoped = PlayerInput {
            select_scope: Some(ScopeKind::X2),
            ..Default::default()
        };
        rig.step(&scoped, 1.0 / 60.0);
        assert_eq!(rig.player.arsenal.scope(), Some(ScopeKind::X2));

        let cycle = PlayerInput {
            cycle_camera: true,
            ..Default::default()
        };
        rig.step(&cycle, 1.0 / 60.0);

        assert_eq!(rig.player.camera.view(), CameraView::Tps);
        assert_eq!(rig.player.arsenal.scope(), None);
    }

    #[test]
    fn scope_toggle_reports_changes_and_rejects_third_person() {
        let mut rig = Rig::new(ColliderSet::new());
        let toggle = PlayerInput {
            toggle_scope: true,
            ..Default::default()
        };

        rig.step(&toggle, 1.0 / 60.0);
        assert_eq!(rig.player.arsenal.scope(), Some(ScopeKind::RedDot));
        rig.step(&toggle, 1.0 / 60.0);
        assert_eq!(rig.player.arsenal.scope(), None);

        let cycle = PlayerInput {
            cycle_camera: true,
            ..Default::default()
        };
        rig.step(&cycle, 1.0 / 60.0);
        rig.events.clear();
        rig.step(&toggle, 1.0 / 60.0);
        rig.step(
            &PlayerInput {
                select_scope: Some(ScopeKind::X2),
                ..Default::default()
            },
            1.0 / 60.0,
        );

        assert_eq!(rig.player.arsenal.scope(), None);
        assert!(
            !rig.events
                .iter()
                .any(|e| matches!(e, GameEvent::ScopeChanged { .. }))
        );
    }

    #[test]
    fn movement_continues_while_reloading() {
        let mut rig = Rig::new(ColliderSet::new());
        let start = PlayerInput {
            reload: true,
            select_weapon: Some(WeaponId::Awm),
            ..Default::default()
        };
        rig.step(&start, 1.0 / 60.0);
        assert!(rig.player.arsenal.is_reloading());

        let walk = PlayerInput::new().holding(InputFlags::FORWARD | InputFlags::FIRE);
        rig.step(&walk, 0.1);

        assert!(rig.player.moving);
        assert!(rig.projectiles.is_empty());
    }
}
