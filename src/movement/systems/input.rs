//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{CharacterController, MovementInput, Player};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (crouch and ground pound read the down side)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.fire_just_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Frame phase of every controller: latch requests for the next fixed step.
pub(crate) fn sample_controller_input(
    input: Res<MovementInput>,
    mut query: Query<&mut CharacterController, With<Player>>,
) {
    let sample = input.sample();
    for mut controller in &mut query {
        if controller.sample_input(&sample) {
            debug!("Facing flipped to {:?}", controller.state().facing);
        }
    }
}
