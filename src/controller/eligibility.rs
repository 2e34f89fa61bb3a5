//! Controller domain: predicates gating ability requests.

use crate::controller::config::ControllerConfig;
use crate::controller::state::CharacterState;

/// Jump eligibility. Wall climb widens the grounded rule; double jump then
/// replaces the result outright when enabled.
pub fn can_jump(state: &CharacterState, config: &ControllerConfig) -> bool {
    let contacts = &state.contacts;
    let mut eligible = contacts.grounded;

    if config.wall_climb.enabled {
        eligible = contacts.grounded || contacts.wall.hugging();
    }

    if config.double_jump.enabled {
        eligible =
            contacts.grounded || state.double_jumps_done < config.double_jump.max_double_jumps;
    }

    eligible
}

pub fn can_dash(state: &CharacterState, config: &ControllerConfig) -> bool {
    config.dash.enabled && state.cooldowns.dash <= 0.0 && !state.abilities_locked()
}

pub fn can_ground_pound(state: &CharacterState, config: &ControllerConfig) -> bool {
    config.ground_pound.enabled
        && !state.contacts.grounded
        && state.vertical_input < -config.input.ground_pound_dead_zone
        && state.cooldowns.ground_pound <= 0.0
        && !state.abilities_locked()
}

pub fn wants_crouch(state: &CharacterState, config: &ControllerConfig) -> bool {
    state.contacts.grounded && state.vertical_input < -config.input.crouch_dead_zone
}
