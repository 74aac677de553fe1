use glam::Vec3;

use crate::geometry::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapObjectKind {
    Wall,
    Pillar,
    Container,
}

#[derive(Debug, Clone)]
pub struct MapObject {
    pub kind: MapObjectKind,
    pub position: Vec3,
    pub half_extents: Vec3,
}

impl MapObject {
    pub fn grounded(kind: MapObjectKind, position: Vec3, size: Vec3) -> Self {
        let half_extents = size * 0.5;
        Self {
            kind,
            position: Vec3::new(position.x, half_extents.y, position.z),
            half_extents,
        }
    }

    pub fn wall(position: Vec3, size: Vec3) -> Self {
        Self::grounded(MapObjectKind::Wall, position, size)
    }

    pub fn pillar(position: Vec3, size: Vec3) -> Self {
        Self::grounded(MapObjectKind::Pillar, position, size)
    }

    pub fn container(position: Vec3, size: Vec3) -> Self {
        Self::grounded(MapObjectKind::Container, position, size)
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.half_extents)
    }
}
