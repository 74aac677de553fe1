use arena::{ArenaSimulation, InputFlags, PlayerInput};
use glam::Vec3;

/// Scripted player: faces the nearest live enemy, holds fire and closes distance.
pub struct Bot {
    chase_range: f32,
}

impl Default for Bot {
    fn default() -> Self {
        Self { chase_range: 20.0 }
    }
}

impl Bot {
    pub fn decide(&self, sim: &ArenaSimulation) -> PlayerInput {
        let player = sim.player();
        let Some(target) = sim.roster().nearest_targetable(player.position) else {
            return PlayerInput::new();
        };

        let mut input = PlayerInput::new().aim_at(player.position, target.position);
        input.orbit_azimuth = input.yaw;

        if player.arsenal.current_ammo() == 0 {
            input.reload = !player.arsenal.is_reloading();
        } else {
            input.held |= InputFlags::FIRE;
        }

        let offset = target.position - player.position;
        if Vec3::new(offset.x, 0.0, offset.z).length() > self.chase_range {
            input.held |= InputFlags::FORWARD | InputFlags::RUN;
        }
        input
    }
}
