//! Movement domain: system modules for the controller tick.

pub(crate) mod input;
pub(crate) mod step;

pub(crate) use input::{read_input, sample_controller_input};
pub(crate) use step::{present_animation, step_controllers};
