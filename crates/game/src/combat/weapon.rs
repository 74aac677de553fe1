use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponId {
    Akm,
    M416,
    Awm,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponSpec {
    pub name: &'static str,
    pub fire_rate_rpm: u32,
    pub damage: i32,
    pub reload_ms: u32,
    pub magazine: u32,
}

const AKM: WeaponSpec = WeaponSpec {
    name: "AKM",
    fire_rate_rpm: 600,
    damage: 35,
    reload_ms: 1800,
    magazine: 30,
};

const M416: WeaponSpec = WeaponSpec {
    name: "M416",
    fire_rate_rpm: 750,
    damage: 28,
    reload_ms: 2000,
    magazine: 40,
};

const AWM: WeaponSpec = WeaponSpec {
    name: "AWM",
    fire_rate_rpm: 50,
    damage: 95,
    reload_ms: 2800,
    magazine: 5,
};

impl WeaponSpec {
    pub fn shot_interval(&self) -> f64 {
        60.0 / f64::from(self.fire_rate_rpm)
    }

    pub fn reload_secs(&self) -> f64 {
        f64::from(self.reload_ms) / 1000.0
    }
}

impl WeaponId {
    pub const ALL: [WeaponId; 3] = [WeaponId::Akm, WeaponId::M416, WeaponId::Awm];

    pub fn spec(self) -> &'static WeaponSpec {
        match self {
            Self::Akm => &AKM,
            Self::M416 => &M416,
            Self::Awm => &AWM,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Self::Akm),
            2 => Some(Self::M416),
            3 => Some(Self::Awm),
            _ => None,
        }
    }

    pub fn scopes(self) -> &'static [ScopeKind] {
        match self {
            Self::Akm => &[ScopeKind::RedDot, ScopeKind::X2],
            Self::M416 => &[ScopeKind::RedDot, ScopeKind::X2, ScopeKind::X4],
            Self::Awm => &[ScopeKind::X4, ScopeKind::X8],
        }
    }

    pub fn supports_scope(self, scope: ScopeKind) -> bool {
        self.scopes().contains(&scope)
    }

    pub fn default_scope(self) -> ScopeKind {
        self.scopes()[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    RedDot,
    X2,
    X4,
    X8,
}

impl ScopeKind {
    pub const HIP_FOV: f32 = 70.0;

    pub fn fov(self) -> f32 {
        match self {
            Self::RedDot => 55.0,
            Self::X2 => 40.0,
            Self::X4 => 25.0,
            Self::X8 => 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WeaponError {
    #[error("{scope:?} scope cannot be mounted on {weapon:?}")]
    ScopeUnavailable { weapon: WeaponId, scope: ScopeKind },
    #[error("scope only available in first-person view")]
    ScopeRequiresFirstPerson,
}
