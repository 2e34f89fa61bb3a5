//! Content domain: controller config loading and validation.

mod data;
mod loader;
mod validation;


pub use data::{CONFIG_SCHEMA_VERSION, CONTROLLER_CONFIG_PATH, ConfigFile};
pub use loader::{ConfigFormat, ContentLoadError, load_config_file, parse_config};
pub use validation::{ValidationError, validate_config};

use std::path::PathBuf;

use bevy::prelude::*;

use crate::controller::ControllerConfig;

/// Where the controller config is read from.
#[derive(Resource, Debug, Clone)]
pub struct ConfigSource(pub PathBuf);

impl Default for ConfigSource {
    fn default() -> Self {
        Self(PathBuf::from(CONTROLLER_CONFIG_PATH))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigSource>()
            .add_systems(PreStartup, load_controller_config);
    }
}

/// Read the config once, falling back to defaults on any load error.
fn load_controller_config(mut commands: Commands, source: Res<ConfigSource>) {
    let config = match load_config_file(&source.0) {
        Ok(config) => {
            info!("Loaded controller config from {}", source.0.display());
            config
        }
        Err(err) => {
            error!("{}", err);
            warn!("Using default controller config");
            ControllerConfig::default()
        }
    };

    for issue in validate_config(&config) {
        warn!("Controller config: {}", issue);
    }

    commands.insert_resource(config);
}
