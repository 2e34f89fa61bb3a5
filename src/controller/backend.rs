//! Controller domain: interfaces the host provides to the controller.
//!
//! The controller never applies forces or impulses. It reads the body's
//! velocity and overwrites it; the host's integrator does the rest.

use bevy::prelude::*;

use crate::controller::sensor::HitboxBounds;
use crate::controller::state::MovementState;

/// Rigid body driven by velocity assignment.
pub trait CharacterBody {
    /// World position of the body origin.
    fn position(&self) -> Vec2;
    /// Current world-space hitbox bounds.
    fn bounds(&self) -> HitboxBounds;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
}

/// Receiver of the per-frame display state.
pub trait AnimationTarget {
    fn play(&mut self, state: MovementState);
    fn set_flip_x(&mut self, flip: bool);
}
