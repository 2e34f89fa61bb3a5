//! Sprites module for character animation.
//!
//! This module handles:
//! - Mapping movement states to animation clips
//! - Frame playback for looping and one-shot clips
//! - Mirroring the sprite to the character's facing

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>()
            .add_systems(PostUpdate, (update_animation_frames, sync_sprite).chain());
    }
}
