//! Controller domain: edge-triggered ability requests.

/// One frame of raw input, as read by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Horizontal axis in [-1, 1].
    pub horizontal: f32,
    /// Vertical axis in [-1, 1], negative is down.
    pub vertical: f32,
    pub jump_pressed: bool,
    /// Generic "fire" button, drives the dash.
    pub fire_pressed: bool,
}

impl InputSample {
    pub fn clamped(self) -> Self {
        Self {
            horizontal: self.horizontal.clamp(-1.0, 1.0),
            vertical: self.vertical.clamp(-1.0, 1.0),
            ..self
        }
    }
}

/// Latched requests waiting for the next physics tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerQueue {
    pub jump: bool,
    pub dash: bool,
    pub ground_pound: bool,
}

impl TriggerQueue {
    /// Latch a request only when `eligible` holds. Returns whether it latched.
    pub fn request(slot: &mut bool, eligible: bool) -> bool {
        if eligible {
            *slot = true;
        }
        eligible
    }

    /// Clear a latch, reporting whether it was set.
    pub fn take(slot: &mut bool) -> bool {
        std::mem::take(slot)
    }
}
