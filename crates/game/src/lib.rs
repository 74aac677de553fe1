pub mod combat;
pub mod enemy;
pub mod event;
pub mod geometry;
pub mod map;
pub mod net;
pub mod player;
pub mod projectile;
pub mod session;
pub mod simulation;

pub use combat::{Combatant, DamageOutcome, Health, ScopeKind, WeaponError, WeaponId, WeaponSpec, apply_damage};
pub use enemy::{Enemy, EnemyAction, EnemyConfig, EnemyController, EnemyId, EnemyKind, EnemyRoster};
pub use event::{EventQueue, GameEvent, PendingEvent};
pub use geometry::{Aabb, ColliderSet};
pub use map::{MapObject, MapObjectKind, WarehouseArena};
pub use net::{
    InboundFrame, NetworkSync, OpponentTransform, PeerFrame, PeerState, ProtocolError,
    RemoteInbox, SignalMessage, Slot, SyncNotice,
};
pub use player::{
    Arsenal, CameraRig, CameraView, InputFlags, Player, PlayerConfig, PlayerController,
    PlayerInput, WeaponState,
};
pub use projectile::{Bullet, BulletId, ProjectileSystem};
pub use session::{
    GameMode, Leaderboard, MatchConfig, MatchContext, MatchPhase, PhaseError, ScoreEntry,
    StartOptions,
};
pub use simulation::{ArenaSimulation, Deadline, DeadlineStatus, FrameClock, TickSummary};
