//! Controller domain: the two-phase tick driving one character.

use bevy::prelude::*;

use crate::controller::backend::{AnimationTarget, CharacterBody};
use crate::controller::config::ControllerConfig;
use crate::controller::error::ControllerError;
use crate::controller::sensor::{self, ContactProbe, ProbeAnchors, ProbeSnapshot};
use crate::controller::state::{CharacterState, Facing, MovementState};
use crate::controller::triggers::{InputSample, TriggerQueue};
use crate::controller::{boost, classifier, eligibility};

/// Scene references supplied at construction. Ground and ceiling checks are
/// local offsets from the body origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneAnchors {
    pub ground_check: Option<Vec2>,
    pub ceiling_check: Option<Vec2>,
    pub camera: Option<Entity>,
    pub facing: Facing,
}

#[derive(Debug, Clone)]
pub struct PlatformerController {
    config: ControllerConfig,
    anchors: ProbeAnchors,
    camera: Option<Entity>,
    state: CharacterState,
    probes: ProbeSnapshot,
    animation_warned: bool,
}

impl PlatformerController {
    /// Build a controller, failing on any missing required anchor. The
    /// camera is only required while camera follow is enabled.
    pub fn new(config: ControllerConfig, anchors: SceneAnchors) -> Result<Self, ControllerError> {
        let ground_check = anchors
            .ground_check
            .ok_or(ControllerError::MissingAnchor("GroundCheck"))?;
        let ceiling_check = anchors
            .ceiling_check
            .ok_or(ControllerError::MissingAnchor("CeilingCheck"))?;
        if config.camera.enabled && anchors.camera.is_none() {
            return Err(ControllerError::MissingAnchor("Camera"));
        }

        Ok(Self {
            config,
            anchors: ProbeAnchors {
                ground_check,
                ceiling_check,
            },
            camera: anchors.camera,
            state: CharacterState::new(anchors.facing),
            probes: ProbeSnapshot::default(),
            animation_warned: false,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn camera(&self) -> Option<Entity> {
        self.camera
    }

    pub fn probes(&self) -> &ProbeSnapshot {
        &self.probes
    }

    /// True once a frame was presented without an animation target.
    pub fn animation_missing(&self) -> bool {
        self.animation_warned
    }

    pub fn movement_state(&self) -> MovementState {
        self.state.movement_state
    }

    /// Frame phase: record axes, update facing and latch eligible requests.
    /// Returns true when facing flipped this frame.
    pub fn sample_input(&mut self, input: &InputSample) -> bool {
        let input = input.clamped();
        let state = &mut self.state;
        state.horizontal_input = input.horizontal;
        state.vertical_input = input.vertical;

        let flipped = (input.horizontal < 0.0 && state.facing == Facing::Right)
            || (input.horizontal > 0.0 && state.facing == Facing::Left);
        if flipped {
            state.facing = state.facing.flipped();
        }

        if input.jump_pressed {
            let eligible = eligibility::can_jump(state, &self.config);
            TriggerQueue::request(&mut state.triggers.jump, eligible);
        }

        if eligibility::wants_crouch(state, &self.config) {
            state.crouching = true;
        } else {
            state.crouching = false;
            let eligible = eligibility::can_ground_pound(state, &self.config);
            TriggerQueue::request(&mut state.triggers.ground_pound, eligible);
        }

        if input.fire_pressed {
            let eligible = eligibility::can_dash(state, &self.config);
            if TriggerQueue::request(&mut state.triggers.dash, eligible) {
                debug!("Dash requested");
            }
        }

        flipped
    }

    /// Fixed-step phase: sense, arbitrate abilities, write velocity, then
    /// age cooldowns and the boost. Returns the derived display state.
    pub fn physics_step(
        &mut self,
        dt: f32,
        probe: &impl ContactProbe,
        body: &mut impl CharacterBody,
    ) -> MovementState {
        let config = &self.config;
        let state = &mut self.state;

        let (contacts, probes) = sensor::sense(
            probe,
            body.position(),
            &body.bounds(),
            &self.anchors,
            config.near_object_sensitivity,
            &state.contacts,
        );
        state.contacts = contacts;
        self.probes = probes;

        if contacts.landed() {
            debug!(
                "Landed: double_jumps_done={}, boost={:?}",
                state.double_jumps_done, state.boost
            );
            boost::reset_on_landing(state, config);
        }

        boost::cancel_on_wall_contact(state, body.velocity());
        boost::resolve_velocity(state, config, body);

        let mut fired = boost::apply_crouch(state, body);
        if let Some(label) = boost::apply_wall_slide(state, config, body) {
            fired = Some(label);
        }
        boost::apply_jump(state, config, body);
        if let Some(label) = boost::apply_dash(state, config) {
            fired = Some(label);
        }
        if let Some(label) = boost::apply_ground_pound(state, config) {
            fired = Some(label);
        }

        state.movement_state = classifier::classify(
            state.movement_state,
            &state.contacts,
            body.velocity(),
            state.abilities_locked(),
            fired,
        );

        boost::decay_cooldowns(state, config, dt);
        boost::decay_boost(state, dt);

        debug_assert!(state.cooldowns.dash >= 0.0 && state.cooldowns.ground_pound >= 0.0);

        state.movement_state
    }

    /// Hand the display state and facing to the animation target, if any.
    /// A missing target is reported once and then ignored.
    pub fn present<A: AnimationTarget>(&mut self, target: Option<&mut A>) {
        match target {
            Some(target) => {
                target.play(self.state.movement_state);
                target.set_flip_x(self.state.facing == Facing::Left);
            }
            None if !self.animation_warned => {
                warn!("No animation target on controlled character, animation disabled");
                self.animation_warned = true;
            }
            None => {}
        }
    }
}
