//! Controller domain: per-character state owned by one controller.

use bevy::prelude::*;

use crate::controller::triggers::TriggerQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Which side probes touched a wall this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
}

impl WallContact {
    pub fn hugging(self) -> bool {
        self.left || self.right
    }
}

/// Contact flags refreshed by the sensor at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub grounded: bool,
    pub was_grounded: bool,
    pub hit_ceiling: bool,
    pub wall: WallContact,
}

impl Contacts {
    /// Airborne last tick, grounded this tick.
    pub fn landed(&self) -> bool {
        self.grounded && !self.was_grounded
    }
}

/// Per-axis suppression of blended movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisLocks {
    pub x: bool,
    pub y: bool,
}

impl AxisLocks {
    pub const NONE: AxisLocks = AxisLocks { x: false, y: false };

    pub fn apply(self, velocity: Vec2) -> Vec2 {
        Vec2::new(
            if self.x { 0.0 } else { velocity.x },
            if self.y { 0.0 } else { velocity.y },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostKind {
    WallPush,
    Dash,
    GroundPound,
}

/// Condition that ends a boost before its timer runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostCancel {
    Never,
    OnLanding,
    OnWallContact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBoost {
    pub kind: BoostKind,
    pub velocity: Vec2,
    pub remaining: f32,
    pub locks: AxisLocks,
    /// Blocks dash and ground pound until the boost expires.
    pub locks_abilities: bool,
    pub cancel: BoostCancel,
    /// Set once the boost velocity has been written to the body.
    pub applied: bool,
}

/// The single velocity override slot shared by every ability.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoostState {
    #[default]
    Inactive,
    Active(ActiveBoost),
}

impl BoostState {
    pub fn active(&self) -> Option<&ActiveBoost> {
        match self {
            BoostState::Active(boost) => Some(boost),
            BoostState::Inactive => None,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.active().map_or(Vec2::ZERO, |b| b.velocity)
    }

    pub fn remaining(&self) -> f32 {
        self.active().map_or(0.0, |b| b.remaining)
    }

    pub fn locks(&self) -> AxisLocks {
        self.active().map_or(AxisLocks::NONE, |b| b.locks)
    }

    pub fn abilities_locked(&self) -> bool {
        self.active().is_some_and(|b| b.locks_abilities)
    }

    pub fn cancels_on(&self, cancel: BoostCancel) -> bool {
        self.active().is_some_and(|b| b.cancel == cancel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cooldowns {
    pub dash: f32,
    pub ground_pound: f32,
}

/// Discrete display label derived from velocity and contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    #[default]
    Idle,
    Running,
    Jumping,
    Falling,
    WallHugging,
    Dashing,
    GroundPounding,
    Crouching,
}

/// Everything a controller mutates during its ticks.
#[derive(Debug, Clone, Default)]
pub struct CharacterState {
    pub horizontal_input: f32,
    pub vertical_input: f32,
    pub facing: Facing,
    pub contacts: Contacts,
    pub crouching: bool,
    pub boost: BoostState,
    pub double_jumps_done: u32,
    pub cooldowns: Cooldowns,
    pub triggers: TriggerQueue,
    pub movement_state: MovementState,
}

impl CharacterState {
    pub fn new(facing: Facing) -> Self {
        Self {
            facing,
            ..default()
        }
    }

    pub fn abilities_locked(&self) -> bool {
        self.boost.abilities_locked()
    }

    pub fn lock_velocity_x(&self) -> bool {
        self.boost.locks().x
    }

    pub fn lock_velocity_y(&self) -> bool {
        self.boost.locks().y
    }

    pub fn velocity_boost(&self) -> Vec2 {
        self.boost.velocity()
    }

    pub fn velocity_boost_remaining(&self) -> f32 {
        self.boost.remaining()
    }

    pub fn kill_boost_on_landing(&self) -> bool {
        self.boost.cancels_on(BoostCancel::OnLanding)
    }

    pub fn kill_boost_on_wall_contact(&self) -> bool {
        self.boost.cancels_on(BoostCancel::OnWallContact)
    }
}
