//! Debug domain: a small static level for exercising the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Marker for test room geometry.
#[derive(Component, Debug)]
pub struct TestRoomBlock;

/// Center and size of every solid block, in world units.
pub const TEST_ROOM_BLOCKS: &[(Vec2, Vec2)] = &[
    // Ground
    (Vec2::new(0.0, -6.0), Vec2::new(26.0, 1.2)),
    // Left and right walls
    (Vec2::new(-13.0, 1.5), Vec2::new(1.2, 16.0)),
    (Vec2::new(13.0, 1.5), Vec2::new(1.2, 16.0)),
    // Platforms
    (Vec2::new(-7.5, -1.5), Vec2::new(4.5, 0.6)),
    (Vec2::new(7.5, 1.5), Vec2::new(4.5, 0.6)),
    (Vec2::new(0.0, 4.5), Vec2::new(3.6, 0.6)),
    // Pillar for wall jumping practice
    (Vec2::new(-3.0, -2.4), Vec2::new(0.9, 6.0)),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let block_color = Color::srgb(0.4, 0.5, 0.4);
    let layers = CollisionLayers::new(GameLayer::World, [GameLayer::Player]);

    for &(center, size) in TEST_ROOM_BLOCKS {
        commands.spawn((
            TestRoomBlock,
            Sprite {
                color: block_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ));
    }

    info!("Spawned test room with {} blocks", TEST_ROOM_BLOCKS.len());
}
