use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub walk_speed: f32,
    pub run_speed: f32,

    pub gravity: f32,
    pub jump_speed: f32,

    pub eye_height: f32,
    pub collision_radius: f32,
    pub ground_probe_radius: f32,

    pub max_health: i32,

    pub muzzle_velocity: f32,
    pub muzzle_offset: f32,

    pub fov_sharpness: f32,
    pub max_pitch: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 10.0,

            gravity: 18.0,
            jump_speed: 7.2,

            eye_height: 2.1,
            collision_radius: 0.5,
            ground_probe_radius: 0.25,

            max_health: 100,

            muzzle_velocity: 80.0,
            muzzle_offset: 0.5,

            fov_sharpness: 12.0,
            max_pitch: 89_f32.to_radians(),
        }
    }
}
