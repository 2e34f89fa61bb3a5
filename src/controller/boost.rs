//! Controller domain: velocity boost slot, cooldowns and ability handlers.
//!
//! Every ability funnels into one override slot ([`BoostState`]). Handlers
//! run in a fixed order after the base velocity is written, so a later
//! handler's body write wins over an earlier one within the same tick.

use bevy::prelude::*;

use crate::controller::backend::CharacterBody;
use crate::controller::config::{ControllerConfig, GROUND_POUND_BOOST_DURATION};
use crate::controller::state::{
    ActiveBoost, AxisLocks, BoostCancel, BoostKind, BoostState, CharacterState, MovementState,
};
use crate::controller::triggers::TriggerQueue;

/// Timers within this distance of zero count as expired. Absorbs the drift
/// of summing fixed-step deltas.
pub const TIMER_EPSILON: f32 = 1e-5;

/// End the current boost: zero vector, release both axis locks and the
/// ability lock.
pub fn expire(state: &mut CharacterState) {
    if let BoostState::Active(boost) = state.boost {
        debug!("Boost expired: kind={:?}", boost.kind);
    }
    state.boost = BoostState::Inactive;
}

/// Landing edge handler, also used by wall slide as a landing equivalent.
/// A landing-cancelled boost keeps steering this tick and expires at the
/// end-of-tick decay.
pub fn reset_on_landing(state: &mut CharacterState, config: &ControllerConfig) {
    if let BoostState::Active(boost) = &mut state.boost {
        if boost.cancel == BoostCancel::OnLanding {
            boost.remaining = 0.0;
            boost.cancel = BoostCancel::Never;
            state.cooldowns.ground_pound = 0.0;
        }
    }

    if config.double_jump.enabled {
        state.double_jumps_done = 0;
    }
}

/// End a wall-cancellable boost once the body has actually been stopped.
/// Returns whether the boost was cancelled.
pub fn cancel_on_wall_contact(state: &mut CharacterState, body_velocity: Vec2) -> bool {
    let stopped = state.boost.active().is_some_and(|boost| {
        boost.cancel == BoostCancel::OnWallContact && boost.applied && body_velocity.x == 0.0
    });

    if stopped {
        debug!("Dash stopped by wall contact");
        expire(state);
    }
    stopped
}

/// Blend input, boost and body velocity, apply axis locks and write the
/// result to the body.
pub fn resolve_velocity(
    state: &mut CharacterState,
    config: &ControllerConfig,
    body: &mut impl CharacterBody,
) -> Vec2 {
    let input_vx = state.horizontal_input * config.speed;

    if state.contacts.hit_ceiling && body.velocity().y > 0.0 {
        body.set_velocity(Vec2::new(input_vx, 0.0));
    }

    let boost = state.boost.velocity();
    let vx = if boost.x.abs() > 0.0 { boost.x } else { input_vx };
    let vy = if boost.y.abs() > 0.0 {
        boost.y
    } else {
        body.velocity().y
    };

    let velocity = state.boost.locks().apply(Vec2::new(vx, vy));
    body.set_velocity(velocity);

    if let BoostState::Active(active) = &mut state.boost {
        active.applied = true;
    }

    velocity
}

/// Crouching halts the body outright.
pub fn apply_crouch(
    state: &CharacterState,
    body: &mut impl CharacterBody,
) -> Option<MovementState> {
    if !state.crouching {
        return None;
    }
    body.set_velocity(Vec2::ZERO);
    Some(MovementState::Crouching)
}

/// Slow descent while pressing into a wall. Counts as touching ground for
/// resets.
pub fn apply_wall_slide(
    state: &mut CharacterState,
    config: &ControllerConfig,
    body: &mut impl CharacterBody,
) -> Option<MovementState> {
    let wall = state.contacts.wall;
    if !config.wall_climb.enabled || !wall.hugging() || body.velocity().y > 0.0 {
        return None;
    }

    let pressing_into_wall = if wall.left {
        state.horizontal_input < 0.0
    } else {
        state.horizontal_input > 0.0
    };
    if !pressing_into_wall {
        return None;
    }

    reset_on_landing(state, config);
    body.set_velocity(Vec2::new(0.0, -config.wall_climb.wall_slide_velocity));
    Some(MovementState::WallHugging)
}

/// Consume a latched jump. Off a wall this also pushes the character away
/// from it.
pub fn apply_jump(
    state: &mut CharacterState,
    config: &ControllerConfig,
    body: &mut impl CharacterBody,
) -> bool {
    if !state.triggers.jump || state.crouching {
        return false;
    }
    TriggerQueue::take(&mut state.triggers.jump);

    let wall = state.contacts.wall;
    if config.wall_climb.enabled && wall.hugging() {
        let away = if wall.left { 1.0 } else { -1.0 };
        let inherited = state.boost.active().copied();

        state.boost = BoostState::Active(ActiveBoost {
            kind: BoostKind::WallPush,
            velocity: Vec2::new(away * config.wall_climb.wall_jump_push_away_force, 0.0),
            remaining: config.wall_climb.wall_jump_away_duration,
            locks: inherited.map_or(AxisLocks::NONE, |b| b.locks),
            locks_abilities: inherited.is_some_and(|b| b.locks_abilities),
            cancel: inherited.map_or(BoostCancel::Never, |b| b.cancel),
            applied: false,
        });
        debug!("Wall jump: push_away={}", away);
    }

    state.double_jumps_done = state.double_jumps_done.saturating_add(1);
    let vx = body.velocity().x;
    body.set_velocity(Vec2::new(vx, config.jump_force));
    debug!("Jump: double_jumps_done={}", state.double_jumps_done);
    true
}

pub fn apply_dash(state: &mut CharacterState, config: &ControllerConfig) -> Option<MovementState> {
    if !state.triggers.dash || state.abilities_locked() {
        return None;
    }
    TriggerQueue::take(&mut state.triggers.dash);

    state.boost = BoostState::Active(ActiveBoost {
        kind: BoostKind::Dash,
        velocity: Vec2::new(state.facing.sign() * config.dash.force, 0.0),
        remaining: config.dash.duration,
        locks: AxisLocks {
            x: false,
            y: config.dash.locks_y,
        },
        locks_abilities: true,
        cancel: BoostCancel::OnWallContact,
        applied: false,
    });
    state.cooldowns.dash = config.dash.cooldown;
    debug!("Dash: facing={:?}", state.facing);
    Some(MovementState::Dashing)
}

pub fn apply_ground_pound(
    state: &mut CharacterState,
    config: &ControllerConfig,
) -> Option<MovementState> {
    if !state.triggers.ground_pound || state.abilities_locked() {
        return None;
    }
    TriggerQueue::take(&mut state.triggers.ground_pound);

    state.boost = BoostState::Active(ActiveBoost {
        kind: BoostKind::GroundPound,
        velocity: Vec2::new(0.0, -config.ground_pound.velocity),
        remaining: GROUND_POUND_BOOST_DURATION,
        locks: AxisLocks {
            x: config.ground_pound.locks_x,
            y: false,
        },
        locks_abilities: true,
        cancel: BoostCancel::OnLanding,
        applied: false,
    });
    state.cooldowns.ground_pound = config.ground_pound.cooldown;
    debug!("Ground pound");
    Some(MovementState::GroundPounding)
}

/// Tick cooldown clocks. A disabled ability's clock is pinned to zero.
pub fn decay_cooldowns(state: &mut CharacterState, config: &ControllerConfig, dt: f32) {
    let tick = |clock: f32, enabled: bool| {
        if enabled && clock > 0.0 {
            (clock - dt).max(0.0)
        } else {
            0.0
        }
    };

    state.cooldowns.dash = tick(state.cooldowns.dash, config.dash.enabled);
    state.cooldowns.ground_pound = tick(state.cooldowns.ground_pound, config.ground_pound.enabled);
}

/// Count the boost down, expiring it once the timer runs out.
pub fn decay_boost(state: &mut CharacterState, dt: f32) {
    let expired = match &mut state.boost {
        BoostState::Active(boost) => {
            boost.remaining -= dt;
            boost.remaining <= TIMER_EPSILON
        }
        BoostState::Inactive => false,
    };

    if expired {
        expire(state);
    }
}
