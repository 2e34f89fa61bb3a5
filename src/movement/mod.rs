//! Movement domain: bevy and avian2d integration of the platformer controller.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub use bootstrap::{PLAYER_SIZE, PLAYER_SPAWN, anchors_for};
pub use components::{CharacterController, GameLayer, Player};
pub use resources::MovementInput;

use bevy::prelude::*;

use crate::camera::{follow_player, spawn_camera};
use crate::controller::ControllerConfig;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    present_animation, read_input, sample_controller_input, step_controllers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerConfig>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player.after(spawn_camera))
            .add_systems(
                Update,
                (read_input, sample_controller_input, present_animation).chain(),
            )
            .add_systems(FixedUpdate, (step_controllers, follow_player).chain());
    }
}
