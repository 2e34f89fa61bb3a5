//! Movement domain: components and physics layers for the controlled character.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::PlatformerController;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid level geometry (floors, walls, platforms)
    World,
    /// Player character, never seen by its own probes
    Player,
    /// Non-solid volumes, ignored by contact probes
    Ignore,
}

impl GameLayer {
    /// Every layer a contact probe may report.
    pub fn probe_mask() -> LayerMask {
        let excluded = GameLayer::Player.to_bits() | GameLayer::Ignore.to_bits();
        LayerMask(GameLayer::all_bits() & !excluded)
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// The controller driving this entity's velocity.
#[derive(Component, Debug, Deref, DerefMut)]
pub struct CharacterController(pub PlatformerController);
