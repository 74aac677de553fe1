mod arsenal;
mod camera;
mod config;
mod controller;
mod input;
mod state;

pub use arsenal::{Arsenal, FireOutcome, WeaponState};
pub use camera::{CameraRig, CameraView, ground_basis, view_direction};
pub use config::PlayerConfig;
pub use controller::PlayerController;
pub use input::{InputFlags, PlayerInput};
pub use state::Player;
