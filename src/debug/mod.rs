//! Debug tools for iterating on controller feel.
//!
//! Features:
//! - Probe drawing (green on contact, red otherwise)
//! - Static test room
//! - Hotkeys: Ctrl+P toggles probes, Ctrl+R resets the player

mod room;
mod state;
mod systems;


pub use room::{TEST_ROOM_BLOCKS, TestRoomBlock};
pub use state::DebugState;
pub use systems::probe_segments;

use bevy::prelude::*;

use crate::debug::room::spawn_test_room;
use crate::debug::systems::{draw_probe_gizmos, handle_debug_hotkeys};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_test_room)
            .add_systems(Update, (handle_debug_hotkeys, draw_probe_gizmos));
    }
}
