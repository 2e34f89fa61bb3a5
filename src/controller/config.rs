//! Controller domain: static tunables and the five ability blocks.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Boost duration installed by a ground pound. Independent of the
/// ground-pound cooldown; the boost normally ends on landing.
pub const GROUND_POUND_BOOST_DURATION: f32 = 3.0;

/// Complete controller configuration, loaded once at startup.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Gravity multiplier handed to the rigid body at spawn.
    pub gravity_scale: f32,
    /// Horizontal speed at full input.
    pub speed: f32,
    /// Vertical velocity assigned on every jump.
    pub jump_force: f32,
    /// Radius of every contact probe.
    pub near_object_sensitivity: f32,
    pub input: InputTuning,
    pub double_jump: DoubleJumpConfig,
    pub wall_climb: WallClimbConfig,
    pub dash: DashConfig,
    pub ground_pound: GroundPoundConfig,
    pub camera: CameraConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            gravity_scale: 2.0,
            speed: 8.0,
            jump_force: 10.0,
            near_object_sensitivity: 0.23,
            input: InputTuning::default(),
            double_jump: DoubleJumpConfig::default(),
            wall_climb: WallClimbConfig::default(),
            dash: DashConfig::default(),
            ground_pound: GroundPoundConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

/// Dead zones applied to the vertical axis.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputTuning {
    /// Down input must go below `-crouch_dead_zone` to crouch.
    pub crouch_dead_zone: f32,
    /// Down input must go below `-ground_pound_dead_zone` to ground pound.
    pub ground_pound_dead_zone: f32,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            crouch_dead_zone: 0.45,
            ground_pound_dead_zone: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DoubleJumpConfig {
    pub enabled: bool,
    pub max_double_jumps: u32,
}

impl Default for DoubleJumpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_double_jumps: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WallClimbConfig {
    pub enabled: bool,
    /// Downward speed while sliding along a wall.
    pub wall_slide_velocity: f32,
    pub wall_jump_push_away_force: f32,
    pub wall_jump_away_duration: f32,
}

impl Default for WallClimbConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            wall_slide_velocity: 0.6,
            wall_jump_push_away_force: 40.0,
            wall_jump_away_duration: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashConfig {
    pub enabled: bool,
    pub force: f32,
    pub duration: f32,
    /// Zero vertical velocity for the whole dash.
    pub locks_y: bool,
    pub cooldown: f32,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            force: 40.0,
            duration: 0.15,
            locks_y: false,
            cooldown: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroundPoundConfig {
    pub enabled: bool,
    pub velocity: f32,
    /// Zero horizontal velocity until the pound ends.
    pub locks_x: bool,
    pub cooldown: f32,
}

impl Default for GroundPoundConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            velocity: 20.0,
            locks_x: true,
            cooldown: 0.5,
        }
    }
}

/// Camera follow settings. When enabled, a camera anchor is required at
/// construction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    pub enabled: bool,
    pub follow_x: bool,
    pub follow_y: bool,
    pub smooth: bool,
    pub damping: f32,
    /// Distance past which the camera jumps straight to the character.
    pub snap_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            follow_x: true,
            follow_y: true,
            smooth: true,
            damping: 2.0,
            snap_distance: 12.0,
        }
    }
}
