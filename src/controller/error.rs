//! Controller domain: construction errors.

/// Error returned when a controller cannot be built from its scene anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// A required scene anchor was not supplied. Carries the anchor name.
    MissingAnchor(&'static str),
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerError::MissingAnchor(name) => {
                write!(f, "Configuration error: missing required anchor '{}'", name)
            }
        }
    }
}

impl std::error::Error for ControllerError {}
