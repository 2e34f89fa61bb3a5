//! Debug domain: hotkeys and probe drawing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::ProbeSnapshot;
use crate::debug::DebugState;
use crate::movement::{CharacterController, PLAYER_SPAWN, Player};

const PROBE_HIT: Color = Color::srgb(0.2, 0.9, 0.2);
const PROBE_MISS: Color = Color::srgb(0.9, 0.2, 0.2);

/// Segment start, end and hit flag for each probe: ground down, ceiling up,
/// left wall left, right wall right.
pub fn probe_segments(probes: &ProbeSnapshot, length: f32) -> [(Vec2, Vec2, bool); 4] {
    let segment = |(point, hit): (Vec2, bool), dir: Vec2| (point, point + dir * length, hit);
    [
        segment(probes.ground, Vec2::NEG_Y),
        segment(probes.ceiling, Vec2::Y),
        segment(probes.wall_left, Vec2::NEG_X),
        segment(probes.wall_right, Vec2::X),
    ]
}

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut players: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    // Ctrl+P: Toggle probe drawing
    if ctrl && keyboard.just_pressed(KeyCode::KeyP) {
        debug_state.show_probes = !debug_state.show_probes;
        info!("Debug: probe drawing {}", debug_state.show_probes);
    }

    // Ctrl+R: Return player to spawn
    if ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        for (mut transform, mut velocity) in &mut players {
            transform.translation = PLAYER_SPAWN;
            velocity.0 = Vec2::ZERO;
        }
        info!("Debug: player reset to spawn");
    }
}

pub(crate) fn draw_probe_gizmos(
    debug_state: Res<DebugState>,
    mut gizmos: Gizmos,
    query: Query<&CharacterController, With<Player>>,
) {
    if !debug_state.show_probes {
        return;
    }

    for controller in &query {
        let length = controller.config().near_object_sensitivity;
        for (start, end, hit) in probe_segments(controller.probes(), length) {
            gizmos.line_2d(start, end, if hit { PROBE_HIT } else { PROBE_MISS });
        }
    }
}
