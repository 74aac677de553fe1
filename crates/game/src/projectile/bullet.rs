use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BulletId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: BulletId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub from_enemy: bool,
    pub damage: i32,
}

impl Bullet {
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    pub fn is_out_of_bounds(&self, max_distance: f32, floor_y: f32) -> bool {
        !self.position.is_finite()
            || self.position.length() > max_distance
            || self.position.y < floor_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(position: Vec3) -> Bullet {
        Bullet {
            id: BulletId(0),
            position,
            velocity: Vec3::new(0.0, 0.0, -80.0),
            from_enemy: false,
            damage: 35,
        }
    }

    #[test]
    fn advances_by_velocity() {
        let mut b = bullet(Vec3::new(0.0, 2.0, 0.0));
        b.advance(0.5);
        assert_eq!(b.position, Vec3::new(0.0, 2.0, -40.0));
    }

    #[test]
    fn bounds() {
        assert!(!bullet(Vec3::new(0.0, 2.0, -149.0)).is_out_of_bounds(150.0, -5.0));
        assert!(bullet(Vec3::new(0.0, 2.0, -151.0)).is_out_of_bounds(150.0, -5.0));
        assert!(bullet(Vec3::new(0.0, -5.1, 0.0)).is_out_of_bounds(150.0, -5.0));
        assert!(bullet(Vec3::splat(f32::NAN)).is_out_of_bounds(150.0, -5.0));
    }
}
