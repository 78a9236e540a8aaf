use serde::Serialize;

use crate::domain::config::{clamp_elasticity, decay_factor_from_slider};
use crate::domain::ForceMode;

use super::WorldCore;

/// Toggle state reported to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Status {
    #[serde(rename = "decay")]
    pub decay_enabled: bool,
    #[serde(rename = "gravity")]
    pub gravity_enabled: bool,
}

pub(super) fn set_gravity_enabled(world: &mut WorldCore, enabled: bool) {
    world.config.gravity_enabled = enabled;
}

pub(super) fn set_gravity_magnitude(world: &mut WorldCore, magnitude: f64) {
    world.config.gravity_magnitude = magnitude;
}

pub(super) fn set_decay_enabled(world: &mut WorldCore, enabled: bool) {
    world.config.decay_enabled = enabled;
}

pub(super) fn set_decay_factor(world: &mut WorldCore, slider: f64) {
    world.config.decay_factor = decay_factor_from_slider(slider);
}

pub(super) fn set_default_elasticity(world: &mut WorldCore, elasticity: f64) {
    let clamped = clamp_elasticity(elasticity);
    if clamped != elasticity {
        log::warn!("default elasticity {} clamped to {}", elasticity, clamped);
    }
    world.config.default_elasticity = clamped;
}

pub(super) fn set_force_mode(world: &mut WorldCore, mode: ForceMode) {
    world.config.force_mode = mode;
}

pub(super) fn toggle_gravity(world: &mut WorldCore) -> bool {
    world.config.gravity_enabled = !world.config.gravity_enabled;
    world.config.gravity_enabled
}

pub(super) fn toggle_decay(world: &mut WorldCore) -> bool {
    world.config.decay_enabled = !world.config.decay_enabled;
    world.config.decay_enabled
}

pub(super) fn status(world: &WorldCore) -> Status {
    Status {
        decay_enabled: world.config.decay_enabled,
        gravity_enabled: world.config.gravity_enabled,
    }
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}
