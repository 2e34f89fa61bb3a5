//! Data definitions for controller content files.
//!
//! These structs mirror the structure in assets/data/controller.ron (or its
//! JSON twin) and are used for deserialization.

use serde::{Deserialize, Serialize};

use crate::controller::ControllerConfig;

/// Schema version this build understands.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Default location of the controller config, relative to the working dir.
pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

// ============================================================================
// Versioned wrapper for controller.ron
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigFile {
    pub schema_version: u32,
    #[serde(default)]
    pub controller: ControllerConfig,
}
