//! Loader for controller config files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{CONFIG_SCHEMA_VERSION, ConfigFile};
use crate::controller::ControllerConfig;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Text formats a config file may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Unknown extensions are RON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Ron,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse config text already read from `file`.
pub fn parse_config(
    file: &str,
    contents: &str,
    format: ConfigFormat,
) -> Result<ControllerConfig, ContentLoadError> {
    let parsed: ConfigFile = match format {
        ConfigFormat::Ron => ron_options().from_str(contents).map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?,
        ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?,
    };

    if parsed.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                parsed.schema_version, CONFIG_SCHEMA_VERSION
            ),
        });
    }

    Ok(parsed.controller)
}

/// Load a controller config from disk, choosing the format by extension.
pub fn load_config_file(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_config(&file_name, &contents, ConfigFormat::from_path(path))
}
