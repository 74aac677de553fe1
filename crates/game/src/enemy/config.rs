use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub move_speed: f32,
    pub collision_radius: f32,
    pub max_health: i32,
    pub death_delay: f64,

    pub engage_range: f32,
    pub penetration_distance: f32,

    pub knife_close_range: f32,
    pub knife_attack_range: f32,
    pub knife_damage: i32,
    pub knife_cooldown: f64,
    pub flank_amplitude: f32,
    pub flank_frequency: f32,

    pub gun_retreat_range: f32,
    pub gun_optimal_range: f32,
    pub gun_min_fire_range: f32,
    pub gun_cooldown: f64,
    pub gun_cover_cooldown: f64,
    pub bullet_speed: f32,
    pub bullet_damage: i32,
    pub muzzle_height: f32,
    pub accuracy_moving: f32,
    pub accuracy_still: f32,

    pub cover_health_fraction: f32,
    pub cover_refresh: f64,
    pub cover_offset: f32,
    pub cover_arrival: f32,
    pub cover_alignment_weight: f32,
    pub cover_distance_weight: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.5,
            collision_radius: 0.5,
            max_health: 100,
            death_delay: 2.0,

            engage_range: 30.0,
            penetration_distance: 1.5,

            knife_close_range: 2.0,
            knife_attack_range: 2.5,
            knife_damage: 15,
            knife_cooldown: 1.0,
            flank_amplitude: 0.4,
            flank_frequency: 2.0,

            gun_retreat_range: 8.0,
            gun_optimal_range: 15.0,
            gun_min_fire_range: 3.0,
            gun_cooldown: 1.2,
            gun_cover_cooldown: 2.0,
            bullet_speed: 45.0,
            bullet_damage: 20,
            muzzle_height: 1.2,
            accuracy_moving: 0.95,
            accuracy_still: 0.98,

            cover_health_fraction: 0.4,
            cover_refresh: 2.0,
            cover_offset: 1.5,
            cover_arrival: 1.0,
            cover_alignment_weight: 10.0,
            cover_distance_weight: 0.1,
        }
    }
}
