//! Movement domain: input resources.

use bevy::prelude::*;

use crate::controller::InputSample;

/// Raw keyboard state for the current frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub fire_just_pressed: bool,
}

impl MovementInput {
    pub fn sample(&self) -> InputSample {
        InputSample {
            horizontal: self.axis.x,
            vertical: self.axis.y,
            jump_pressed: self.jump_just_pressed,
            fire_pressed: self.fire_just_pressed,
        }
    }
}
