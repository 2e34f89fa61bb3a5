use avian2d::prelude::*;
use bevy::prelude::*;

use skyline_controller::{camera, content, movement, sprites};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Skyline".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
    .add_plugins((
        content::ContentPlugin,
        camera::CameraPlugin,
        movement::MovementPlugin,
        sprites::SpritesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(skyline_controller::debug::DebugPlugin);

    app.run();
}
