use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::combat::ScopeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraView {
    #[default]
    Fps,
    Tps,
    Topdown,
}

impl CameraView {
    pub fn next(self) -> Self {
        match self {
            Self::Fps => Self::Tps,
            Self::Tps => Self::Topdown,
            Self::Topdown => Self::Fps,
        }
    }

    pub fn uses_orbit(self) -> bool {
        !matches!(self, Self::Fps)
    }
}

/// View direction for a yaw/pitch pair; yaw 0 looks down -Z.
pub fn view_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}

pub fn ground_basis(angle: f32) -> (Vec3, Vec3) {
    let (sin, cos) = angle.sin_cos();
    (Vec3::new(-sin, 0.0, -cos), Vec3::new(cos, 0.0, -sin))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    view: CameraView,
    fov: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            view: CameraView::Fps,
            fov: ScopeKind::HIP_FOV,
        }
    }
}

impl CameraRig {
    const TPS_DISTANCE: f32 = 6.0;
    const TPS_RISE: f32 = 1.5;
    const TOPDOWN_DISTANCE: f32 = 8.0;
    const TOPDOWN_RISE: f32 = 20.0;

    pub fn view(&self) -> CameraView {
        self.view
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn cycle(&mut self) -> CameraView {
        self.view = self.view.next();
        self.view
    }

    pub fn ease_fov(&mut self, scope: Option<ScopeKind>, sharpness: f32, dt: f32) {
        let target = scope.map_or(ScopeKind::HIP_FOV, ScopeKind::fov);
        let blend = 1.0 - (-sharpness * dt).exp();
        self.fov += (target - self.fov) * blend;
    }

    pub fn position(&self, eye: Vec3, orbit_azimuth: f32) -> Vec3 {
        let (forward, _) = ground_basis(orbit_azimuth);
        match self.view {
            CameraView::Fps => eye,
            CameraView::Tps => eye - forward * Self::TPS_DISTANCE + Vec3::Y * Self::TPS_RISE,
            CameraView::Topdown => {
                eye - forward * Self::TOPDOWN_DISTANCE + Vec3::Y * Self::TOPDOWN_RISE
            }
        }
    }
}
