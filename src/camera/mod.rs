//! Camera domain: orthographic camera that trails the controlled character.


use bevy::prelude::*;

use crate::controller::CameraConfig;
use crate::movement::{CharacterController, Player};

/// World units are meters; one unit spans this many pixels at scale 1.
pub const PIXELS_PER_UNIT: f32 = 32.0;

#[derive(Component, Debug)]
pub struct FollowCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        FollowCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Next camera position for one step toward `target`. Disabled axes keep
/// the camera's coordinate; a target beyond `snap_distance` is jumped to.
pub fn follow(camera: Vec2, target: Vec2, config: &CameraConfig, dt: f32) -> Vec2 {
    if !config.enabled {
        return camera;
    }

    let goal = Vec2::new(
        if config.follow_x { target.x } else { camera.x },
        if config.follow_y { target.y } else { camera.y },
    );

    if !config.smooth || camera.distance(goal) > config.snap_distance {
        return goal;
    }

    let t = (config.damping * dt).clamp(0.0, 1.0);
    camera.lerp(goal, t)
}

/// Move each controller's camera after its physics step.
pub(crate) fn follow_player(
    time: Res<Time>,
    players: Query<(&Transform, &CharacterController), With<Player>>,
    mut cameras: Query<&mut Transform, (With<FollowCamera>, Without<Player>)>,
) {
    let dt = time.delta_secs();
    for (player, controller) in &players {
        let Some(camera_entity) = controller.camera() else {
            continue;
        };
        let Ok(mut camera) = cameras.get_mut(camera_entity) else {
            continue;
        };

        let next = follow(
            camera.translation.truncate(),
            player.translation.truncate(),
            &controller.config().camera,
            dt,
        );
        camera.translation.x = next.x;
        camera.translation.y = next.y;
    }
}
