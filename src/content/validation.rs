//! Validation for controller tunables.

use crate::controller::ControllerConfig;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field '{}' {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a tunable is finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $field:expr, $value:expr) => {
        let value: f32 = $value;
        if !value.is_finite() {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be finite, got {}", value),
            });
        } else if value < 0.0 {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must not be negative, got {}", value),
            });
        }
    };
}

/// Helper macro for checking a dead zone lies within the axis range
macro_rules! check_unit_range {
    ($errors:expr, $field:expr, $value:expr) => {
        let value: f32 = $value;
        if !(0.0..=1.0).contains(&value) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be within [0, 1], got {}", value),
            });
        }
    };
}

/// Validate every tunable in the config.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_config(config: &ControllerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_non_negative!(errors, "gravity_scale", config.gravity_scale);
    check_non_negative!(errors, "speed", config.speed);
    check_non_negative!(errors, "jump_force", config.jump_force);
    check_non_negative!(
        errors,
        "near_object_sensitivity",
        config.near_object_sensitivity
    );

    check_unit_range!(errors, "input.crouch_dead_zone", config.input.crouch_dead_zone);
    check_unit_range!(
        errors,
        "input.ground_pound_dead_zone",
        config.input.ground_pound_dead_zone
    );

    let wall = &config.wall_climb;
    check_non_negative!(errors, "wall_climb.wall_slide_velocity", wall.wall_slide_velocity);
    check_non_negative!(
        errors,
        "wall_climb.wall_jump_push_away_force",
        wall.wall_jump_push_away_force
    );
    check_non_negative!(
        errors,
        "wall_climb.wall_jump_away_duration",
        wall.wall_jump_away_duration
    );

    check_non_negative!(errors, "dash.force", config.dash.force);
    check_non_negative!(errors, "dash.duration", config.dash.duration);
    check_non_negative!(errors, "dash.cooldown", config.dash.cooldown);

    check_non_negative!(errors, "ground_pound.velocity", config.ground_pound.velocity);
    check_non_negative!(errors, "ground_pound.cooldown", config.ground_pound.cooldown);

    check_non_negative!(errors, "camera.damping", config.camera.damping);
    check_non_negative!(errors, "camera.snap_distance", config.camera.snap_distance);

    errors
}
