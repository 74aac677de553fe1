use serde::{Deserialize, Serialize};

use crate::event::{EventQueue, GameEvent};

use super::StartOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    Menu,
    Playing,
    Victory,
    GameOver,
}

impl MatchPhase {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Victory | Self::GameOver)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Ai,
    Mp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhaseError {
    #[error("cannot {action} while in {from:?}")]
    InvalidTransition {
        from: MatchPhase,
        action: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct MatchContext {
    phase: MatchPhase,
    kills: u32,
    total_enemies: u32,
    infinite_lives: bool,
    mode: GameMode,
    epoch: u32,
    now: f64,
    started_at: f64,
    shots_fired: u32,
    shots_hit: u32,
}

impl MatchContext {
    pub fn new(total_enemies: u32) -> Self {
        Self {
            phase: MatchPhase::Menu,
            kills: 0,
            total_enemies,
            infinite_lives: false,
            mode: GameMode::Ai,
            epoch: 0,
            now: 0.0,
            started_at: 0.0,
            shots_fired: 0,
            shots_hit: 0,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn total_enemies(&self) -> u32 {
        self.total_enemies
    }

    pub fn set_total_enemies(&mut self, total: u32) {
        self.total_enemies = total;
    }

    pub fn infinite_lives(&self) -> bool {
        self.infinite_lives
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn set_now(&mut self, now: f64) {
        self.now = now;
    }

    pub fn elapsed(&self) -> f64 {
        (self.now - self.started_at).max(0.0)
    }

    pub fn start(&mut self, options: StartOptions, events: &mut EventQueue) -> Result<(), PhaseError> {
        if self.phase != MatchPhase::Menu {
            return Err(self.invalid("start"));
        }
        self.infinite_lives = options.infinite_lives;
        self.mode = options.mode;
        self.begin_round(events);
        Ok(())
    }

    pub fn reset(&mut self, events: &mut EventQueue) -> Result<(), PhaseError> {
        if !self.phase.is_finished() {
            return Err(self.invalid("reset"));
        }
        self.begin_round(events);
        Ok(())
    }

    pub fn return_to_menu(&mut self, events: &mut EventQueue) -> Result<(), PhaseError> {
        if !self.phase.is_finished() {
            return Err(self.invalid("return to menu"));
        }
        self.transition(MatchPhase::Menu, events);
        Ok(())
    }

    pub fn connection_lost(&mut self, events: &mut EventQueue) {
        if self.phase != MatchPhase::Menu {
            self.transition(MatchPhase::Menu, events);
        }
    }

    pub fn register_kill(&mut self, events: &mut EventQueue) {
        if !self.is_playing() {
            log::debug!("Ignoring kill while {:?}", self.phase);
            return;
        }
        self.kills += 1;
        log::info!("Kill count: {}/{}", self.kills, self.total_enemies);
        if self.kills >= self.total_enemies {
            self.transition(MatchPhase::Victory, events);
        }
    }

    pub fn player_killed(&mut self, events: &mut EventQueue) {
        events.push(GameEvent::PlayerKilled);
        if self.is_playing() {
            self.transition(MatchPhase::GameOver, events);
        }
    }

    pub fn record_shot(&mut self) {
        self.shots_fired += 1;
    }

    pub fn record_hit(&mut self) {
        self.shots_hit += 1;
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn accuracy(&self) -> f32 {
        if self.shots_fired == 0 {
            return 0.0;
        }
        self.shots_hit as f32 / self.shots_fired as f32 * 100.0
    }

    fn begin_round(&mut self, events: &mut EventQueue) {
        self.kills = 0;
        self.shots_fired = 0;
        self.shots_hit = 0;
        self.started_at = self.now;
        self.transition(MatchPhase::Playing, events);
    }

    fn transition(&mut self, to: MatchPhase, events: &mut EventQueue) {
        let from = self.phase;
        if from == MatchPhase::Playing && to != MatchPhase::Playing {
            self.epoch = self.epoch.wrapping_add(1);
        }
        self.phase = to;
        log::info!("Match phase changed: {:?} -> {:?}", from, to);
        events.push(GameEvent::PhaseChanged { from, to });
    }

    fn invalid(&self, action: &'static str) -> PhaseError {
        PhaseError::InvalidTransition {
            from: self.phase,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(total: u32) -> (MatchContext, EventQueue) {
        let mut ctx = MatchContext::new(total);
        let mut events = EventQueue::default();
        ctx.start(StartOptions::default(), &mut events).unwrap();
        (ctx, events)
    }

    #[test]
    fn victory_on_last_kill_only() {
        let (mut ctx, mut events) = playing(8);

        for _ in 0..7 {
            ctx.register_kill(&mut events);
        }
        assert_eq!(ctx.phase(), MatchPhase::Playing);

        ctx.register_kill(&mut events);
        assert_eq!(ctx.phase(), MatchPhase::Victory);
        assert_eq!(ctx.kills(), 8);
    }

    #[test]
    fn kills_after_the_match_ends_do_not_count() {
        let (mut ctx, mut events) = playing(8);
        ctx.register_kill(&mut events);
        ctx.player_killed(&mut events);

        ctx.register_kill(&mut events);

        assert_eq!(ctx.phase(), MatchPhase::GameOver);
        assert_eq!(ctx.kills(), 1);
    }

    #[test]
    fn leaving_playing_bumps_epoch() {
        let (mut ctx, mut events) = playing(1);
        let epoch = ctx.epoch();

        ctx.player_killed(&mut events);
        assert_eq!(ctx.phase(), MatchPhase::GameOver);
        assert_eq!(ctx.epoch(), epoch + 1);

        ctx.reset(&mut events).unwrap();
        assert_eq!(ctx.phase(), MatchPhase::Playing);
        assert_eq!(ctx.epoch(), epoch + 1);
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let (mut ctx, mut events) = playing(1);

        assert!(ctx.start(StartOptions::default(), &mut events).is_err());
        assert!(ctx.reset(&mut events).is_err());
        assert!(ctx.return_to_menu(&mut events).is_err());

        ctx.register_kill(&mut events);
        ctx.return_to_menu(&mut events).unwrap();
        assert_eq!(ctx.phase(), MatchPhase::Menu);
    }

    #[test]
    fn options_fixed_for_match() {
        let mut ctx = MatchContext::new(2);
        let mut events = EventQueue::default();
        let options = StartOptions {
            infinite_lives: true,
            mode: GameMode::Mp,
        };

        ctx.start(options, &mut events).unwrap();
        ctx.player_killed(&mut events);
        ctx.reset(&mut events).unwrap();

        assert!(ctx.infinite_lives());
        assert_eq!(ctx.mode(), GameMode::Mp);
    }

    #[test]
    fn accuracy_tracks_hits() {
        let (mut ctx, _) = playing(8);
        assert_eq!(ctx.accuracy(), 0.0);

        for _ in 0..4 {
            ctx.record_shot();
        }
        ctx.record_hit();
        assert_eq!(ctx.accuracy(), 25.0);
    }
}
