//! Movement domain: fixed-step controller integration over avian2d.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{CharacterBody, ContactProbe, HitboxBounds};
use crate::movement::{CharacterController, GameLayer, Player};
use crate::sprites::AnimationController;

/// Circle overlap against every solid layer, excluding the probing body.
pub(crate) struct AvianProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianProbe<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>, entity: Entity) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::probe_mask())
                .with_excluded_entities([entity]),
        }
    }
}

impl ContactProbe for AvianProbe<'_, '_, '_> {
    fn probe(&self, point: Vec2, radius: f32) -> bool {
        // A zero radius still needs a shape to overlap with
        let radius = radius.max(f32::EPSILON);
        !self
            .spatial_query
            .shape_intersections(&Collider::circle(radius), point, 0.0, &self.filter)
            .is_empty()
    }
}

/// The rigid body as seen by the controller for one step.
pub(crate) struct AvianBody<'a> {
    position: Vec2,
    bounds: HitboxBounds,
    velocity: &'a mut LinearVelocity,
}

impl CharacterBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn bounds(&self) -> HitboxBounds {
        self.bounds
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }
}

/// Tight shape bounds at the body pose. `ColliderAabb` is padded for
/// speculative contacts and would push the wall probes outward at speed.
pub(crate) fn hitbox_bounds(
    collider: &Collider,
    position: Vec2,
    rotation: Rotation,
) -> HitboxBounds {
    let aabb = collider.aabb(position, rotation);
    HitboxBounds {
        min: aabb.min,
        max: aabb.max,
    }
}

pub(crate) fn step_controllers(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Position,
            &Rotation,
            &Collider,
            &mut LinearVelocity,
            &mut CharacterController,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    for (entity, position, rotation, collider, mut velocity, mut controller) in &mut query {
        let probe = AvianProbe::new(&spatial_query, entity);
        let mut body = AvianBody {
            position: position.0,
            bounds: hitbox_bounds(collider, position.0, *rotation),
            velocity: &mut velocity,
        };

        let previous = controller.movement_state();
        let next = controller.physics_step(dt, &probe, &mut body);
        if next != previous {
            debug!("Movement state {:?} -> {:?}", previous, next);
        }
    }
}

/// Push the derived state and facing into the sprite animation.
pub(crate) fn present_animation(
    mut query: Query<(&mut CharacterController, Option<&mut AnimationController>), With<Player>>,
) {
    for (mut controller, mut animation) in &mut query {
        controller.present(animation.as_deref_mut());
    }
}
