//! Controller domain: ability arbitration and velocity resolution.
//!
//! Host-agnostic. The host supplies a [`ContactProbe`], a [`CharacterBody`]
//! and optionally an [`AnimationTarget`], and drives
//! [`PlatformerController::sample_input`] once per frame and
//! [`PlatformerController::physics_step`] once per fixed step.

pub mod backend;
pub mod boost;
pub mod classifier;
pub mod config;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod sensor;
pub mod state;
pub mod triggers;


pub use backend::{AnimationTarget, CharacterBody};
pub use config::{
    CameraConfig, ControllerConfig, DashConfig, DoubleJumpConfig, GROUND_POUND_BOOST_DURATION,
    GroundPoundConfig, InputTuning, WallClimbConfig,
};
pub use engine::{PlatformerController, SceneAnchors};
pub use error::ControllerError;
pub use sensor::{ContactProbe, HitboxBounds, ProbeAnchors, ProbeSnapshot};
pub use state::{
    ActiveBoost, AxisLocks, BoostCancel, BoostKind, BoostState, CharacterState, Contacts,
    Cooldowns, Facing, MovementState, WallContact,
};
pub use triggers::{InputSample, TriggerQueue};
