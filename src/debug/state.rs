//! Debug domain: toggles for dev-only drawing.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether contact probes are drawn
    pub show_probes: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_probes: true }
    }
}
