//! Controller domain: display-state derivation.

use bevy::prelude::*;

use crate::controller::state::{Contacts, MovementState};

/// Derive the display label for this tick.
///
/// Rules run in order starting from the previous label, each one free to
/// overwrite the last. The vertical rule only looks at velocity, so a
/// grounded character with a small downward velocity reads as Falling.
/// A handler `fired` this tick replaces the generic result.
pub fn classify(
    previous: MovementState,
    contacts: &Contacts,
    velocity: Vec2,
    abilities_locked: bool,
    fired: Option<MovementState>,
) -> MovementState {
    let mut label = previous;

    if contacts.grounded && velocity.x == 0.0 {
        label = MovementState::Idle;
    }
    if contacts.grounded && velocity.x != 0.0 && !abilities_locked {
        label = MovementState::Running;
    }
    if velocity.y < 0.0 && !abilities_locked {
        label = MovementState::Falling;
    } else if velocity.y > 0.0 {
        label = MovementState::Jumping;
    }

    fired.unwrap_or(label)
}
