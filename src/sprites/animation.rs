//! Animation state machine and playback.
//!
//! Maps controller movement states onto sprite animations and advances
//! frames over time.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::controller::{AnimationTarget, MovementState};

/// Animation clips for a platformer character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallHug,
    Dash,
    GroundPound,
    Crouch,
}

impl From<MovementState> for AnimationState {
    fn from(state: MovementState) -> Self {
        match state {
            MovementState::Idle => AnimationState::Idle,
            MovementState::Running => AnimationState::Run,
            MovementState::Jumping => AnimationState::Jump,
            MovementState::Falling => AnimationState::Fall,
            MovementState::WallHugging => AnimationState::WallHug,
            MovementState::Dashing => AnimationState::Dash,
            MovementState::GroundPounding => AnimationState::GroundPound,
            MovementState::Crouching => AnimationState::Crouch,
        }
    }
}

/// Component for animation playback on a character sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Base name for animation sprites (e.g., "player.base").
    pub animation_base: String,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
    /// Mirror the sprite horizontally (character facing left).
    pub flip_x: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            animation_base: String::new(),
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
            flip_x: false,
        }
    }
}

impl AnimationController {
    /// Create a new controller with the given base animation name.
    pub fn new(animation_base: &str) -> Self {
        Self {
            animation_base: animation_base.to_string(),
            ..default()
        }
    }

    /// Set the animation state, resetting frame if state changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state == state {
            return;
        }

        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        // Bursts play once and hold their last frame
        self.looping = !matches!(state, AnimationState::Dash | AnimationState::GroundPound);

        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Jump | AnimationState::Fall => 2,
            AnimationState::WallHug => 2,
            AnimationState::Dash => 3,
            AnimationState::GroundPound => 3,
            AnimationState::Crouch => 1,
        };

        self.frame_duration = match state {
            AnimationState::Dash => 0.05,
            AnimationState::Run => 0.1,
            _ => 0.15,
        };
    }

    /// Get the current animation name suffix (e.g., "idle", "wall_hug").
    pub fn animation_suffix(&self) -> &'static str {
        match self.state {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
            AnimationState::WallHug => "wall_hug",
            AnimationState::Dash => "dash",
            AnimationState::GroundPound => "ground_pound",
            AnimationState::Crouch => "crouch",
        }
    }

    /// Get the full sprite key for the current frame.
    pub fn current_sprite_key(&self) -> String {
        format!(
            "{}_{}_{}",
            self.animation_base,
            self.animation_suffix(),
            self.current_frame + 1 // 1-indexed for file naming
        )
    }

    /// Advance playback by `dt`. Returns true on the frame a one-shot clip ends.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;
        if self.frame_timer < self.frame_duration {
            return false;
        }

        self.frame_timer -= self.frame_duration;
        self.current_frame += 1;

        if self.current_frame < self.total_frames {
            return false;
        }
        if self.looping {
            self.current_frame = 0;
            false
        } else {
            self.current_frame = self.total_frames - 1;
            self.finished = true;
            true
        }
    }
}

impl AnimationTarget for AnimationController {
    fn play(&mut self, state: MovementState) {
        self.set_state(state.into());
    }

    fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
    }
}

/// Message fired when a non-looping animation completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        if controller.advance(time.delta_secs()) {
            finished_events.write(AnimationFinished {
                entity,
                state: controller.state,
            });
        }
    }
}

/// Tint per clip until real sprite sheets are wired in.
pub fn state_tint(state: AnimationState) -> Color {
    match state {
        AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
        AnimationState::Run => Color::srgb(0.85, 0.95, 0.85),
        AnimationState::Jump | AnimationState::Fall => Color::srgb(0.85, 0.85, 0.95),
        AnimationState::WallHug => Color::srgb(0.95, 0.93, 0.8),
        AnimationState::Dash => Color::srgb(0.95, 0.7, 0.4),
        AnimationState::GroundPound => Color::srgb(0.95, 0.5, 0.5),
        AnimationState::Crouch => Color::srgb(0.7, 0.7, 0.7),
    }
}

/// Mirror sprites and apply the clip tint after the controller presented.
pub fn sync_sprite(
    mut query: Query<(&AnimationController, &mut Sprite), Changed<AnimationController>>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.flip_x = controller.flip_x;
        sprite.color = state_tint(controller.state);
    }
}
