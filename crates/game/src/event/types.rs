use crate::combat::{ScopeKind, WeaponId};
use crate::enemy::EnemyId;
use crate::player::CameraView;
use crate::session::MatchPhase;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ShotFired {
        weapon: WeaponId,
    },
    EnemyShotFired {
        enemy: EnemyId,
    },
    WeaponEmpty {
        weapon: WeaponId,
    },
    ReloadStarted {
        weapon: WeaponId,
    },
    ReloadCompleted {
        weapon: WeaponId,
        ammo: u32,
    },
    WeaponSwitched {
        weapon: WeaponId,
    },
    ScopeChanged {
        scope: Option<ScopeKind>,
    },
    CameraViewChanged {
        view: CameraView,
    },
    EnemyHit {
        enemy: EnemyId,
        damage: i32,
        remaining: i32,
    },
    PlayerHit {
        damage: i32,
        remaining: i32,
    },
    EnemyKilled {
        enemy: EnemyId,
    },
    EnemyRemoved {
        enemy: EnemyId,
    },
    PlayerKilled,
    PhaseChanged {
        from: MatchPhase,
        to: MatchPhase,
    },
    OpponentJoined,
    ConnectionLost,
}

impl GameEvent {
    pub fn is_audio_cue(&self) -> bool {
        matches!(
            self,
            Self::ShotFired { .. }
                | Self::EnemyShotFired { .. }
                | Self::WeaponEmpty { .. }
                | Self::ReloadStarted { .. }
                | Self::ReloadCompleted { .. }
                | Self::EnemyHit { .. }
                | Self::PlayerHit { .. }
        )
    }

    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::PhaseChanged { .. } | Self::OpponentJoined | Self::ConnectionLost
        )
    }
}
