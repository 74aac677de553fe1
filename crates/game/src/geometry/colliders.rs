use glam::Vec3;

use super::Aabb;

#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    boxes: Vec<Aabb>,
}

impl ColliderSet {
    pub const GROUND_HEIGHT: f32 = 0.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_boxes(boxes: Vec<Aabb>) -> Self {
        let mut set = Self::new();
        set.replace(boxes);
        set
    }

    pub fn replace(&mut self, boxes: Vec<Aabb>) {
        let total = boxes.len();
        self.boxes = boxes.into_iter().filter(Aabb::is_finite).collect();
        if self.boxes.len() != total {
            log::warn!(
                "Discarded {} malformed colliders",
                total - self.boxes.len()
            );
        }
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn intersects_sphere(&self, point: Vec3, radius: f32) -> bool {
        self.boxes
            .iter()
            .any(|aabb| aabb.intersects_sphere(point, radius))
    }

    pub fn ground_height_at(&self, x: f32, z: f32, radius: f32) -> f32 {
        self.boxes
            .iter()
            .filter(|aabb| aabb.contains_xz(x, z, radius))
            .map(|aabb| aabb.max.y)
            .fold(Self::GROUND_HEIGHT, f32::max)
    }

    pub fn max_penetration(&self, point: Vec3, radius: f32) -> f32 {
        self.boxes
            .iter()
            .map(|aabb| aabb.penetration_depth(point, radius))
            .fold(0.0, f32::max)
    }
}
