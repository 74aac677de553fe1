use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    pub fn distance_squared_to(&self, point: Vec3) -> f32 {
        point.distance_squared(self.closest_point(point))
    }

    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.distance_squared_to(center) < radius * radius
    }

    pub fn contains_xz(&self, x: f32, z: f32, padding: f32) -> bool {
        x >= self.min.x - padding
            && x <= self.max.x + padding
            && z >= self.min.z - padding
            && z <= self.max.z + padding
    }

    pub fn penetration_depth(&self, center: Vec3, radius: f32) -> f32 {
        let distance = self.distance_squared_to(center).sqrt();
        (radius - distance).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let aabb = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn sphere_touching_face_from_outside() {
        let aabb = Aabb::from_center(Vec3::ZERO, Vec3::ONE);

        assert!(aabb.intersects_sphere(Vec3::new(1.4, 0.0, 0.0), 0.5));
        assert!(!aabb.intersects_sphere(Vec3::new(1.6, 0.0, 0.0), 0.5));
        assert!(aabb.intersects_sphere(Vec3::ZERO, 0.1));
    }

    #[test]
    fn corner_uses_euclidean_distance() {
        let aabb = Aabb::from_center(Vec3::ZERO, Vec3::ONE);
        let diagonal = Vec3::new(1.4, 0.0, 1.4);

        assert!(!aabb.intersects_sphere(diagonal, 0.5));
        assert!(aabb.penetration_depth(diagonal, 0.5) == 0.0);
    }
}
