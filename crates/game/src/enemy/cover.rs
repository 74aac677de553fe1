use glam::Vec3;

use crate::geometry::ColliderSet;

use super::EnemyConfig;
use super::state::flat_distance;

pub fn cover_candidates(colliders: &ColliderSet, height: f32, offset: f32) -> Vec<(Vec3, Vec3)> {
    colliders
        .boxes()
        .iter()
        .flat_map(|aabb| {
            let center = aabb.center();
            let half = aabb.half_extents();
            let at = |x: f32, z: f32| (Vec3::new(x, height, z), center);
            [
                at(center.x + half.x + offset, center.z),
                at(center.x - half.x - offset, center.z),
                at(center.x, center.z + half.z + offset),
                at(center.x, center.z - half.z - offset),
            ]
        })
        .collect()
}

pub fn select_cover(
    colliders: &ColliderSet,
    from: Vec3,
    player: Vec3,
    config: &EnemyConfig,
) -> Option<Vec3> {
    let mut best: Option<(Vec3, f32)> = None;

    for (candidate, obstacle) in cover_candidates(colliders, from.y, config.cover_offset) {
        if colliders.intersects_sphere(candidate, config.collision_radius) {
            continue;
        }
        let travel = flat_distance(from, candidate);
        if travel > config.engage_range {
            continue;
        }

        let to_obstacle = flatten(obstacle - candidate).normalize_or_zero();
        let to_player = flatten(player - candidate).normalize_or_zero();
        let score = config.cover_alignment_weight * to_obstacle.dot(to_player)
            - config.cover_distance_weight * travel;

        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    best.map(|(point, _)| point)
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
