use bitflags::bitflags;
use glam::Vec3;

use crate::combat::{ScopeKind, WeaponId};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputFlags: u16 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const RUN = 1 << 4;
        const JUMP = 1 << 5;
        const FIRE = 1 << 6;
    }
}

impl Default for InputFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerInput {
    pub held: InputFlags,
    pub yaw: f32,
    pub pitch: f32,
    pub orbit_azimuth: f32,

    pub reload: bool,
    pub select_weapon: Option<WeaponId>,
    pub toggle_scope: bool,
    pub select_scope: Option<ScopeKind>,
    pub cycle_camera: bool,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(mut self, flags: InputFlags) -> Self {
        self.held |= flags;
        self
    }

    pub fn looking(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    pub fn aim_at(mut self, from: Vec3, to: Vec3) -> Self {
        let dir = (to - from).normalize_or_zero();
        if dir != Vec3::ZERO {
            self.yaw = (-dir.x).atan2(-dir.z);
            self.pitch = dir.y.clamp(-1.0, 1.0).asin();
        }
        self
    }

    pub fn is_held(&self, flag: InputFlags) -> bool {
        self.held.contains(flag)
    }

    pub fn move_axes(&self) -> (f32, f32) {
        let axis = |pos: InputFlags, neg: InputFlags| {
            f32::from(u8::from(self.is_held(pos))) - f32::from(u8::from(self.is_held(neg)))
        };
        (
            axis(InputFlags::RIGHT, InputFlags::LEFT),
            axis(InputFlags::FORWARD, InputFlags::BACK),
        )
    }
}
