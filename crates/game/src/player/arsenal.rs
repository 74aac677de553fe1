use std::collections::BTreeMap;

use crate::combat::{ScopeKind, WeaponError, WeaponId, WeaponSpec};
use crate::simulation::{Deadline, DeadlineStatus};

use super::CameraView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponState {
    Ready,
    Firing,
    Reloading,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    Fired(&'static WeaponSpec),
    Empty,
    Reloading,
    Cooldown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingReload {
    weapon: WeaponId,
    deadline: Deadline,
}

#[derive(Debug, Clone)]
pub struct Arsenal {
    current: WeaponId,
    ammo: BTreeMap<WeaponId, u32>,
    next_shot_at: f64,
    reload: Option<PendingReload>,
    scope: Option<ScopeKind>,
}

impl Default for Arsenal {
    fn default() -> Self {
        Self::new()
    }
}

impl Arsenal {
    pub fn new() -> Self {
        Self {
            current: WeaponId::Akm,
            ammo: WeaponId::ALL.iter().map(|&w| (w, w.spec().magazine)).collect(),
            next_shot_at: f64::NEG_INFINITY,
            reload: None,
            scope: None,
        }
    }

    pub fn current(&self) -> WeaponId {
        self.current
    }

    pub fn ammo(&self, weapon: WeaponId) -> u32 {
        self.ammo.get(&weapon).copied().unwrap_or(0)
    }

    pub fn current_ammo(&self) -> u32 {
        self.ammo(self.current)
    }

    pub fn set_ammo(&mut self, weapon: WeaponId, amount: u32) {
        self.ammo.insert(weapon, amount.min(weapon.spec().magazine));
    }

    pub fn scope(&self) -> Option<ScopeKind> {
        self.scope
    }

    pub fn is_reloading(&self) -> bool {
        self.reload.is_some()
    }

    pub fn reloading_weapon(&self) -> Option<WeaponId> {
        self.reload.map(|r| r.weapon)
    }

    pub fn state(&self, now: f64) -> WeaponState {
        if self.reload.is_some() {
            WeaponState::Reloading
        } else if now < self.next_shot_at {
            WeaponState::Firing
        } else {
            WeaponState::Ready
        }
    }

    pub fn select(&mut self, weapon: WeaponId) -> bool {
        if self.current == weapon {
            return false;
        }
        self.current = weapon;
        if self.scope.is_some_and(|s| !weapon.supports_scope(s)) {
            self.scope = None;
        }
        true
    }

    pub fn try_fire(&mut self, now: f64) -> FireOutcome {
        if self.reload.is_some() {
            return FireOutcome::Reloading;
        }

        let spec = self.current.spec();
        let Some(rounds) = self.ammo.get_mut(&self.current).filter(|r| **r > 0) else {
            return FireOutcome::Empty;
        };
        if now < self.next_shot_at {
            return FireOutcome::Cooldown;
        }

        *rounds -= 1;
        self.next_shot_at = now + spec.shot_interval();
        FireOutcome::Fired(spec)
    }

    pub fn start_reload(&mut self, now: f64, epoch: u32) -> Option<WeaponId> {
        if self.reload.is_some() {
            return None;
        }
        let weapon = self.current;
        self.reload = Some(PendingReload {
            weapon,
            deadline: Deadline::after(now, weapon.spec().reload_secs(), epoch),
        });
        Some(weapon)
    }

    pub fn poll_reload(&mut self, now: f64, epoch: u32) -> Option<(WeaponId, u32)> {
        let pending = self.reload?;
        match pending.deadline.poll(now, epoch) {
            DeadlineStatus::Pending => None,
            DeadlineStatus::Stale => {
                self.reload = None;
                None
            }
            DeadlineStatus::Due => {
                self.reload = None;
                let magazine = pending.weapon.spec().magazine;
                self.ammo.insert(pending.weapon, magazine);
                Some((pending.weapon, magazine))
            }
        }
    }

    pub fn toggle_scope(&mut self, view: CameraView) -> Result<Option<ScopeKind>, WeaponError> {
        if self.scope.is_some() {
            self.scope = None;
            return Ok(None);
        }
        if view != CameraView::Fps {
            return Err(WeaponError::ScopeRequiresFirstPerson);
        }
        self.scope = Some(self.current.default_scope());
        Ok(self.scope)
    }

    pub fn select_scope(&mut self, scope: ScopeKind, view: CameraView) -> Result<(), WeaponError> {
        if view != CameraView::Fps {
            return Err(WeaponError::ScopeRequiresFirstPerson);
        }
        if !self.current.supports_scope(scope) {
            return Err(WeaponError::ScopeUnavailable {
                weapon: self.current,
                scope,
            });
        }
        self.scope = Some(scope);
        Ok(())
    }

    pub fn clear_scope(&mut self) -> bool {
        self.scope.take().is_some()
    }
}
