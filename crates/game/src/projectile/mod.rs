mod bullet;
mod system;

pub use bullet::{Bullet, BulletId};
pub use system::{ProjectileReport, ProjectileSystem};
