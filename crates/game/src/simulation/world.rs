use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::combat::{DamageOutcome, apply_damage};
use crate::enemy::{Enemy, EnemyAction, EnemyController, EnemyId, EnemyRoster, Perception};
use crate::event::{EventQueue, GameEvent, PendingEvent};
use crate::geometry::ColliderSet;
use crate::map::WarehouseArena;
use crate::net::{NetworkSync, OpponentTransform, RemoteInbox, SyncNotice};
use crate::player::{Player, PlayerController, PlayerInput};
use crate::projectile::{Bullet, ProjectileSystem};
use crate::session::{
    GameMode, Leaderboard, MatchConfig, MatchContext, MatchPhase, PhaseError, ScoreEntry,
    StartOptions,
};

use super::FrameClock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSummary {
    pub frame: u64,
    pub dt: f32,
    pub phase: MatchPhase,
    pub player_hits: u32,
    pub enemy_hits: u32,
    pub enemy_shots: u32,
    pub removed: Vec<EnemyId>,
    pub published: bool,
}

pub struct ArenaSimulation {
    config: MatchConfig,
    colliders: ColliderSet,
    player_controller: PlayerController,
    enemy_controller: EnemyController,
    player: Player,
    enemies: EnemyRoster,
    projectiles: ProjectileSystem,
    ctx: MatchContext,
    events: EventQueue,
    network: NetworkSync,
    leaderboard: Leaderboard,
    clock: FrameClock,
    rng: StdRng,
    lobby_options: StartOptions,
}

impl ArenaSimulation {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_colliders(config, WarehouseArena::new().colliders())
    }

    pub fn with_colliders(config: MatchConfig, colliders: ColliderSet) -> Self {
        let spawn = WarehouseArena::player_spawn(None, config.player.eye_height);
        Self {
            colliders,
            player_controller: PlayerController::new(config.player.clone()),
            enemy_controller: EnemyController::new(config.enemy.clone()),
            player: Player::new(&config.player, spawn),
            enemies: EnemyRoster::new(),
            projectiles: ProjectileSystem::new(),
            ctx: MatchContext::new(config.enemy_count as u32),
            events: EventQueue::new(config.event_capacity),
            network: NetworkSync::new(),
            leaderboard: Leaderboard::default(),
            clock: FrameClock::default(),
            rng: StdRng::seed_from_u64(config.seed),
            lobby_options: StartOptions::default(),
            config,
        }
    }

    pub fn start(&mut self, options: StartOptions) -> Result<(), PhaseError> {
        let total = match options.mode {
            GameMode::Ai => self.config.enemy_count as u32,
            GameMode::Mp => 0,
        };
        self.ctx.set_total_enemies(total);
        self.ctx.start(options, &mut self.events)?;
        self.spawn_round();
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), PhaseError> {
        self.ctx.reset(&mut self.events)?;
        self.spawn_round();
        Ok(())
    }

    pub fn return_to_menu(&mut self) -> Result<(), PhaseError> {
        self.ctx.return_to_menu(&mut self.events)?;
        self.clear_round();
        Ok(())
    }

    pub fn save_score(&mut self, name: &str) -> Result<Option<usize>, PhaseError> {
        if self.ctx.phase() != MatchPhase::Victory {
            return Err(PhaseError::InvalidTransition {
                from: self.ctx.phase(),
                action: "save score",
            });
        }

        let entry = ScoreEntry {
            name: name.to_string(),
            kills: self.ctx.kills(),
            accuracy: self.ctx.accuracy(),
            elapsed_secs: self.ctx.elapsed(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        };
        log::info!(
            "Saving score for {}: {} kills, {:.0}% accuracy, {:.1}s",
            entry.name,
            entry.kills,
            entry.accuracy,
            entry.elapsed_secs
        );
        let rank = self.leaderboard.record(entry);
        self.reset()?;
        Ok(rank)
    }

    pub fn damage_enemy(&mut self, id: EnemyId, amount: i32) -> Option<DamageOutcome> {
        let enemy = self.enemies.get_mut(id)?;
        Some(apply_damage(enemy, amount, &mut self.ctx, &mut self.events))
    }

    pub fn damage_player(&mut self, amount: i32) -> DamageOutcome {
        apply_damage(&mut self.player, amount, &mut self.ctx, &mut self.events)
    }

    pub fn set_lobby_options(&mut self, options: StartOptions) {
        self.lobby_options = options;
    }

    pub fn tick(&mut self, input: &PlayerInput, raw_dt: f32) -> TickSummary {
        let dt = self.clock.advance(raw_dt);
        self.ctx.set_now(self.clock.now());
        self.events.set_frame(self.clock.frame(), self.clock.now());

        let mut summary = TickSummary {
            frame: self.clock.frame(),
            dt,
            ..Default::default()
        };

        self.handle_network();

        if self.ctx.is_playing() {
            self.player_controller.update(
                input,
                &mut self.player,
                &self.colliders,
                &mut self.projectiles,
                &mut self.ctx,
                &mut self.events,
                dt,
            );
        }

        if self.ctx.is_playing() {
            summary.enemy_shots = self.update_enemies(dt);
        }

        if self.ctx.is_playing() {
            let report = self.projectiles.tick(
                dt,
                &mut self.player,
                &mut self.enemies,
                &mut self.ctx,
                &mut self.events,
            );
            summary.player_hits = report.player_hits;
            summary.enemy_hits = report.enemy_hits;
        }

        if self.ctx.is_playing() {
            summary.removed = self.enemies.reap(&self.ctx, &mut self.events);
        }

        if self.ctx.is_playing() && self.ctx.mode() == GameMode::Mp && self.network.is_connected() {
            summary.published = self
                .network
                .publish(self.player.position, self.player.yaw);
        }

        summary.phase = self.ctx.phase();
        summary
    }

    fn update_enemies(&mut self, dt: f32) -> u32 {
        let perception = Perception {
            player: self.player.position,
            living_enemies: self.enemies.living_count(),
            now: self.ctx.now(),
        };
        let mut shots = 0;

        for enemy in self.enemies.iter_mut() {
            if !self.ctx.is_playing() {
                break;
            }
            let action = self.enemy_controller.update(
                enemy,
                &perception,
                &self.colliders,
                &mut self.rng,
                dt,
            );
            match action {
                Some(EnemyAction::Melee { damage }) => {
                    apply_damage(&mut self.player, damage, &mut self.ctx, &mut self.events);
                }
                Some(EnemyAction::Fire {
                    origin,
                    velocity,
                    damage,
                }) => {
                    self.projectiles.spawn(origin, velocity, true, damage);
                    self.events.push(GameEvent::EnemyShotFired { enemy: enemy.id() });
                    shots += 1;
                }
                None => {}
            }
        }
        shots
    }

    fn handle_network(&mut self) {
        for notice in self.network.poll(self.clock.frame()) {
            match notice {
                SyncNotice::RoomJoined(slot) => log::debug!("Assigned slot {:?}", slot),
                SyncNotice::OpponentJoined => {
                    self.events.push(GameEvent::OpponentJoined);
                }
                SyncNotice::MatchStarted => {
                    let options = StartOptions {
                        mode: GameMode::Mp,
                        ..self.lobby_options
                    };
                    if let Err(err) = self.start(options) {
                        log::warn!("Ignoring match start: {}", err);
                    }
                }
                SyncNotice::ConnectionLost => {
                    self.events.push(GameEvent::ConnectionLost);
                    if self.ctx.mode() == GameMode::Mp {
                        self.ctx.connection_lost(&mut self.events);
                        self.clear_round();
                    }
                }
            }
        }
    }

    fn spawn_round(&mut self) {
        self.projectiles.clear();
        self.enemies.clear();

        let slot = match self.ctx.mode() {
            GameMode::Mp => self.network.slot(),
            GameMode::Ai => None,
        };
        let spawn = WarehouseArena::player_spawn(slot, self.config.player.eye_height);
        self.player.respawn(&self.config.player, spawn);

        if self.ctx.mode() == GameMode::Ai {
            let positions = WarehouseArena::enemy_spawns(self.config.enemy_count, &mut self.rng);
            for (index, position) in positions.into_iter().enumerate() {
                self.enemies
                    .spawn(WarehouseArena::enemy_kind(index), position, &self.config.enemy);
            }
        }

        log::info!(
            "Round started: {:?} mode, {} enemies, infinite lives {}",
            self.ctx.mode(),
            self.enemies.len(),
            self.ctx.infinite_lives()
        );
    }

    fn clear_round(&mut self) {
        self.projectiles.clear();
        self.enemies.clear();
    }

    pub fn drain_events(&mut self) -> Vec<PendingEvent> {
        self.events.drain()
    }

    pub fn phase(&self) -> MatchPhase {
        self.ctx.phase()
    }

    pub fn context(&self) -> &MatchContext {
        &self.ctx
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn colliders(&self) -> &ColliderSet {
        &self.colliders
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn roster(&self) -> &EnemyRoster {
        &self.enemies
    }

    pub fn roster_mut(&mut self) -> &mut EnemyRoster {
        &mut self.enemies
    }

    pub fn bullets(&self) -> &[Bullet] {
        self.projectiles.bullets()
    }

    pub fn opponent(&self) -> Option<&OpponentTransform> {
        self.network.opponent()
    }

    pub fn network(&self) -> &NetworkSync {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut NetworkSync {
        &mut self.network
    }

    pub fn inbox(&self) -> RemoteInbox {
        self.network.inbox()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }
}
