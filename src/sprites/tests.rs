//! Sprites domain: tests for clip mapping and frame playback.

use super::{AnimationController, AnimationState, state_tint};
use crate::controller::{AnimationTarget, MovementState};

// -----------------------------------------------------------------------------
// State mapping tests
// -----------------------------------------------------------------------------

#[test]
fn test_every_movement_state_has_a_clip() {
    let pairs = [
        (MovementState::Idle, AnimationState::Idle),
        (MovementState::Running, AnimationState::Run),
        (MovementState::Jumping, AnimationState::Jump),
        (MovementState::Falling, AnimationState::Fall),
        (MovementState::WallHugging, AnimationState::WallHug),
        (MovementState::Dashing, AnimationState::Dash),
        (MovementState::GroundPounding, AnimationState::GroundPound),
        (MovementState::Crouching, AnimationState::Crouch),
    ];
    for (movement, clip) in pairs {
        assert_eq!(AnimationState::from(movement), clip);
    }
}

#[test]
fn test_play_resets_frame_on_change_only() {
    let mut anim = AnimationController::new("player.base");
    anim.play(MovementState::Running);
    assert_eq!(anim.state, AnimationState::Run);
    assert_eq!(anim.previous_state, AnimationState::Idle);

    anim.current_frame = 3;
    anim.play(MovementState::Running);
    assert_eq!(anim.current_frame, 3, "same clip keeps playing");

    anim.play(MovementState::Falling);
    assert_eq!(anim.current_frame, 0);
    assert_eq!(anim.previous_state, AnimationState::Run);
}

#[test]
fn test_set_flip_x() {
    let mut anim = AnimationController::default();
    anim.set_flip_x(true);
    assert!(anim.flip_x);
    anim.set_flip_x(false);
    assert!(!anim.flip_x);
}

#[test]
fn test_sprite_key_is_one_indexed() {
    let mut anim = AnimationController::new("player.base");
    anim.play(MovementState::WallHugging);
    assert_eq!(anim.current_sprite_key(), "player.base_wall_hug_1");
}

// -----------------------------------------------------------------------------
// Playback tests
// -----------------------------------------------------------------------------

#[test]
fn test_looping_clip_wraps() {
    let mut anim = AnimationController::default();
    let step = anim.frame_duration;
    for _ in 0..anim.total_frames {
        assert!(!anim.advance(step + 0.001));
    }
    assert_eq!(anim.current_frame, 0);
    assert!(!anim.finished);
}

#[test]
fn test_one_shot_clip_holds_last_frame() {
    let mut anim = AnimationController::default();
    anim.play(MovementState::Dashing);
    assert!(!anim.looping);

    let step = anim.frame_duration + 0.001;
    let mut finished_at = None;
    for tick in 0..10 {
        if anim.advance(step) {
            finished_at = Some(tick);
        }
    }
    assert_eq!(finished_at, Some(2));
    assert!(anim.finished);
    assert_eq!(anim.current_frame, anim.total_frames - 1);
}

#[test]
fn test_partial_frame_does_not_advance() {
    let mut anim = AnimationController::default();
    anim.advance(anim.frame_duration * 0.5);
    assert_eq!(anim.current_frame, 0);
}

#[test]
fn test_tints_differ_for_bursts() {
    assert_ne!(
        state_tint(AnimationState::Dash),
        state_tint(AnimationState::GroundPound)
    );
}
