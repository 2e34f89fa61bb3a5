//! Physics-driven 2D platformer character controller.
//!
//! `controller` holds the host-agnostic engine; the remaining modules wire
//! it into bevy and avian2d.

pub mod camera;
pub mod content;
pub mod controller;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;
pub mod sprites;
