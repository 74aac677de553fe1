mod aabb;
mod colliders;

pub use aabb::Aabb;
pub use colliders::ColliderSet;
