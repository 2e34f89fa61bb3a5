//! Movement domain: player bootstrap from the loaded controller config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::FollowCamera;
use crate::controller::{ControllerConfig, Facing, PlatformerController, SceneAnchors};
use crate::movement::{CharacterController, GameLayer, Player};
use crate::sprites::AnimationController;

/// Player hitbox in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Probe anchors for a hitbox of `size`: ground check at the feet, ceiling
/// check at the head.
pub fn anchors_for(size: Vec2, camera: Option<Entity>) -> SceneAnchors {
    let half_height = size.y * 0.5;
    SceneAnchors {
        ground_check: Some(Vec2::new(0.0, -half_height)),
        ceiling_check: Some(Vec2::new(0.0, half_height)),
        camera,
        facing: Facing::Right,
    }
}

/// Spawn the controlled character. A controller that fails to build is
/// reported and never spawned.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    cameras: Query<Entity, With<FollowCamera>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let camera = cameras.iter().next();
    let anchors = anchors_for(PLAYER_SIZE, camera);
    let controller = match PlatformerController::new((*config).clone(), anchors) {
        Ok(controller) => controller,
        Err(err) => {
            error!("Player controller not created: {}", err);
            return;
        }
    };

    info!(
        "Spawning player: speed={}, jump_force={}, gravity_scale={}, double_jump={}, wall_climb={}, dash={}, ground_pound={}",
        config.speed,
        config.jump_force,
        config.gravity_scale,
        config.double_jump.enabled,
        config.wall_climb.enabled,
        config.dash.enabled,
        config.ground_pound.enabled
    );

    commands.spawn((
        // Identity & control
        (Player, CharacterController(controller)),
        // Rendering
        (
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            AnimationController::new("player.base"),
        ),
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(config.gravity_scale),
            Friction::new(0.0),
            SweptCcd::default(),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Default, GameLayer::World]),
        ),
    ));
}
