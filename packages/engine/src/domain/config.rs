//! Simulation tunables.
//!
//! `SimConfig` is owned by the world and read on every step. It is plain data:
//! setters live on `WorldCore`, and JSON loading validates the values that have
//! no clamp of their own.
//!
//! ```json
//! {
//!   "dt": 0.1,
//!   "arena_width": 800.0,
//!   "arena_height": 600.0,
//!   "gravity_enabled": true,
//!   "gravity_magnitude": 9.8,
//!   "force_mode": "uniform_gravity"
//! }
//! ```
//! Missing keys take their defaults.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

pub const DEFAULT_DT: f64 = 0.1;
pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;
pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;
pub const DEFAULT_GRAVITY: f64 = 9.8;
/// Slider-to-factor mapping: `factor = 1 - slider * DECAY_SLIDER_SCALE`.
pub const DECAY_SLIDER_SCALE: f64 = 0.1;

/// Which force policy runs at the start of each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceMode {
    /// Constant downward field scaled by mass.
    #[default]
    UniformGravity,
    /// Inverse-square attraction between every pair of bodies.
    PairwiseAttraction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f64,
    pub arena_width: f64,
    pub arena_height: f64,

    pub gravity_enabled: bool,
    pub gravity_magnitude: f64,
    pub force_mode: ForceMode,
    /// `G` in `G * mA * mB / dist²`.
    pub attraction_constant: f64,
    /// Separation floor for the attraction force.
    pub attraction_min_distance: f64,
    /// Gravity multiplier for heavy bodies, applied only while decay is enabled.
    pub heavy_gravity_scale: f64,

    pub decay_enabled: bool,
    /// Per-unit-time velocity retention. Velocity is scaled by `decay_factor^dt`.
    pub decay_factor: f64,

    pub default_elasticity: f64,
    /// Wall-bounce speeds below this snap to zero.
    pub rest_velocity_threshold: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            gravity_enabled: true,
            gravity_magnitude: DEFAULT_GRAVITY,
            force_mode: ForceMode::UniformGravity,
            attraction_constant: 1000.0,
            attraction_min_distance: 5.0,
            heavy_gravity_scale: 0.7,
            decay_enabled: false,
            decay_factor: 0.99,
            default_elasticity: 1.0,
            rest_velocity_threshold: 0.01,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let mut config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain f64/bool/enum fields always serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reject values with no defined clamp that would break stepping, and
    /// coerce the ones that have one.
    pub fn validate(&mut self) -> EngineResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if !(self.arena_width > 0.0 && self.arena_height > 0.0)
            || !self.arena_width.is_finite()
            || !self.arena_height.is_finite()
        {
            return Err(EngineError::InvalidConfiguration(format!(
                "arena must have positive finite extents, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if !self.attraction_min_distance.is_finite() || self.attraction_min_distance <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "attraction_min_distance must be positive and finite, got {}",
                self.attraction_min_distance
            )));
        }

        let clamped = clamp_elasticity(self.default_elasticity);
        if clamped != self.default_elasticity {
            log::warn!(
                "default_elasticity {} clamped to {}",
                self.default_elasticity,
                clamped
            );
            self.default_elasticity = clamped;
        }
        Ok(())
    }
}

/// Clamp to `[0, 1]`; NaN falls back to 0.
pub fn clamp_elasticity(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Map a normalised decay slider (nominally `[0, 1]`) to a decay factor.
/// Out-of-range input is mapped as given.
pub fn decay_factor_from_slider(slider: f64) -> f64 {
    1.0 - slider * DECAY_SLIDER_SCALE
}
