mod health;
mod weapon;

pub use health::{Combatant, DamageOutcome, Health, apply_damage};
pub use weapon::{ScopeKind, WeaponError, WeaponId, WeaponSpec};
