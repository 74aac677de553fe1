use glam::Vec3;
use rand::Rng;

use crate::enemy::EnemyKind;
use crate::geometry::{Aabb, ColliderSet};
use crate::net::Slot;

use super::{MapObject, MapObjectKind};

pub struct WarehouseArena {
    objects: Vec<MapObject>,
}

impl Default for WarehouseArena {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseArena {
    pub const HALF_SIZE: f32 = 35.0;
    const WALL_HEIGHT: f32 = 4.0;
    const WALL_THICKNESS: f32 = 1.0;

    const PILLAR_SIZE: Vec3 = Vec3::new(1.5, 2.0, 1.5);
    const PILLARS: [[f32; 2]; 10] = [
        [-10.0, -10.0],
        [10.0, -10.0],
        [-10.0, 10.0],
        [10.0, 10.0],
        [-15.0, 0.0],
        [15.0, 0.0],
        [0.0, -15.0],
        [0.0, 15.0],
        [-5.0, -20.0],
        [5.0, 20.0],
    ];

    const CONTAINER_SIZE: Vec3 = Vec3::new(3.0, 4.0, 2.0);
    const CONTAINERS: [[f32; 2]; 4] = [[-20.0, -20.0], [20.0, -20.0], [-20.0, 20.0], [20.0, 20.0]];

    const ENEMY_ANCHORS: [[f32; 2]; 8] = [
        [-15.0, -15.0],
        [15.0, -15.0],
        [-15.0, 15.0],
        [15.0, 15.0],
        [-20.0, 0.0],
        [20.0, 0.0],
        [0.0, -20.0],
        [0.0, 20.0],
    ];
    const ENEMY_JITTER: f32 = 2.0;

    pub const ENEMY_LOADOUT: [EnemyKind; 8] = [
        EnemyKind::Gun,
        EnemyKind::Gun,
        EnemyKind::Knife,
        EnemyKind::Gun,
        EnemyKind::Knife,
        EnemyKind::Gun,
        EnemyKind::Knife,
        EnemyKind::Gun,
    ];

    pub fn new() -> Self {
        let mut objects = Vec::new();

        Self::add_perimeter_walls(&mut objects);
        Self::add_pillars(&mut objects);
        Self::add_containers(&mut objects);

        Self { objects }
    }

    fn add_perimeter_walls(objects: &mut Vec<MapObject>) {
        let span = Self::HALF_SIZE * 2.0;
        let long = Vec3::new(span, Self::WALL_HEIGHT, Self::WALL_THICKNESS);
        let deep = Vec3::new(Self::WALL_THICKNESS, Self::WALL_HEIGHT, span);

        objects.push(MapObject::wall(Vec3::new(0.0, 0.0, -Self::HALF_SIZE), long));
        objects.push(MapObject::wall(Vec3::new(0.0, 0.0, Self::HALF_SIZE), long));
        objects.push(MapObject::wall(Vec3::new(-Self::HALF_SIZE, 0.0, 0.0), deep));
        objects.push(MapObject::wall(Vec3::new(Self::HALF_SIZE, 0.0, 0.0), deep));
    }

    fn add_pillars(objects: &mut Vec<MapObject>) {
        for [x, z] in Self::PILLARS {
            objects.push(MapObject::pillar(Vec3::new(x, 0.0, z), Self::PILLAR_SIZE));
        }
    }

    fn add_containers(objects: &mut Vec<MapObject>) {
        for [x, z] in Self::CONTAINERS {
            objects.push(MapObject::container(Vec3::new(x, 0.0, z), Self::CONTAINER_SIZE));
        }
    }

    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    pub fn count_of(&self, kind: MapObjectKind) -> usize {
        self.objects.iter().filter(|o| o.kind == kind).count()
    }

    pub fn colliders(&self) -> ColliderSet {
        ColliderSet::from_boxes(self.objects.iter().map(MapObject::aabb).collect::<Vec<Aabb>>())
    }

    pub fn player_spawn(slot: Option<Slot>, eye_height: f32) -> Vec3 {
        match slot {
            None | Some(Slot::P1) => Vec3::new(0.0, eye_height, 5.0),
            Some(Slot::P2) => Vec3::new(0.0, eye_height, -5.0),
        }
    }

    pub fn enemy_spawns<R: Rng>(count: usize, rng: &mut R) -> Vec<Vec3> {
        (0..count)
            .map(|i| {
                let [x, z] = Self::ENEMY_ANCHORS[i % Self::ENEMY_ANCHORS.len()];
                let jitter_x = rng.gen_range(-Self::ENEMY_JITTER..=Self::ENEMY_JITTER);
                let jitter_z = rng.gen_range(-Self::ENEMY_JITTER..=Self::ENEMY_JITTER);
                Vec3::new(x + jitter_x, 0.0, z + jitter_z)
            })
            .collect()
    }

    pub fn enemy_kind(index: usize) -> EnemyKind {
        Self::ENEMY_LOADOUT
            .get(index)
            .copied()
            .unwrap_or(EnemyKind::Knife)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn layout_matches_arena() {
        let arena = WarehouseArena::new();

        assert_eq!(arena.count_of(MapObjectKind::Wall), 4);
        assert_eq!(arena.count_of(MapObjectKind::Pillar), 10);
        assert_eq!(arena.count_of(MapObjectKind::Container), 4);
        assert_eq!(arena.colliders().len(), 18);
    }

    #[test]
    fn pillars_sit_on_the_floor() {
        let colliders = WarehouseArena::new().colliders();

        assert_eq!(colliders.ground_height_at(10.0, 10.0, 0.0), 2.0);
        assert_eq!(colliders.ground_height_at(20.0, 20.0, 0.0), 4.0);
        assert_eq!(colliders.ground_height_at(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn spawns_stay_near_anchors() {
        let mut rng = StdRng::seed_from_u64(7);
        let spawns = WarehouseArena::enemy_spawns(8, &mut rng);

        assert_eq!(spawns.len(), 8);
        for (spawn, [x, z]) in spawns.iter().zip(WarehouseArena::ENEMY_ANCHORS) {
            assert!((spawn.x - x).abs() <= 2.0);
            assert!((spawn.z - z).abs() <= 2.0);
            assert_eq!(spawn.y, 0.0);
        }
    }
}
