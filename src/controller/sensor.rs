//! Controller domain: ground, ceiling and wall contact sensing.

use bevy::prelude::*;

use crate::controller::state::{Contacts, WallContact};

/// Horizontal inset of the wall probes from the hitbox edges.
pub const WALL_PROBE_INSET: f32 = 0.1;

/// World overlap query. Implementations must ignore the character itself
/// and any non-solid layers.
pub trait ContactProbe {
    fn probe(&self, point: Vec2, radius: f32) -> bool;
}

/// Axis-aligned hitbox bounds in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HitboxBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl HitboxBounds {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Local offsets of the ground and ceiling probes from the body origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeAnchors {
    pub ground_check: Vec2,
    pub ceiling_check: Vec2,
}

/// Where each probe was taken last tick and whether it hit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeSnapshot {
    pub ground: (Vec2, bool),
    pub ceiling: (Vec2, bool),
    pub wall_left: (Vec2, bool),
    pub wall_right: (Vec2, bool),
}

/// Wall probe points: mid-height, just inside each side of the hitbox.
pub fn wall_probe_points(bounds: &HitboxBounds) -> (Vec2, Vec2) {
    let half_height = bounds.size().y * 0.5;
    let left = bounds.min + Vec2::new(WALL_PROBE_INSET, half_height);
    let right = bounds.max - Vec2::new(WALL_PROBE_INSET, half_height);
    (left, right)
}

/// Sample all four probes and roll `previous` forward into new contacts.
pub fn sense(
    probe: &impl ContactProbe,
    position: Vec2,
    bounds: &HitboxBounds,
    anchors: &ProbeAnchors,
    radius: f32,
    previous: &Contacts,
) -> (Contacts, ProbeSnapshot) {
    let ground_point = position + anchors.ground_check;
    let ceiling_point = position + anchors.ceiling_check;
    let (left_point, right_point) = wall_probe_points(bounds);

    let grounded = probe.probe(ground_point, radius);
    let hit_ceiling = probe.probe(ceiling_point, radius);
    let left = probe.probe(left_point, radius);
    let right = probe.probe(right_point, radius);

    let contacts = Contacts {
        grounded,
        was_grounded: previous.grounded,
        hit_ceiling,
        wall: WallContact { left, right },
    };
    let snapshot = ProbeSnapshot {
        ground: (ground_point, grounded),
        ceiling: (ceiling_point, hit_ceiling),
        wall_left: (left_point, left),
        wall_right: (right_point, right),
    };

    (contacts, snapshot)
}
