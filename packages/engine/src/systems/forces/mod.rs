//! Force policies run at the start of each step.
//!
//! A policy adds into each body's force accumulator; it never touches
//! velocity or position. Exactly one policy is active, chosen by
//! [`ForceMode`].

use crate::domain::{Category, ForceMode, SimConfig};
use crate::rigid_body::{RigidBody, Vec2};

/// Per-step force contribution over the whole body set.
pub trait ForcePolicy {
    fn apply(&self, bodies: &mut [RigidBody]);
}

/// Constant field `(0, g * m)`, pointing down the screen.
pub struct UniformGravity {
    pub magnitude: f64,
    /// Scale for heavy bodies, already resolved against the decay toggle.
    pub heavy_scale: f64,
}

impl UniformGravity {
    /// Heavy bodies feel the reduced pull only while momentum decay is on.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            magnitude: config.gravity_magnitude,
            heavy_scale: if config.decay_enabled {
                config.heavy_gravity_scale
            } else {
                1.0
            },
        }
    }
}

impl ForcePolicy for UniformGravity {
    fn apply(&self, bodies: &mut [RigidBody]) {
        for body in bodies.iter_mut() {
            let mut fy = self.magnitude * body.mass;
            if body.category == Category::Heavy {
                fy *= self.heavy_scale;
            }
            body.apply_force(Vec2::new(0.0, fy));
        }
    }
}

/// `G * mA * mB / dist²` toward every other body, with `dist` floored.
pub struct PairwiseAttraction {
    pub g: f64,
    pub min_distance: f64,
}

impl PairwiseAttraction {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            g: config.attraction_constant,
            min_distance: config.attraction_min_distance,
        }
    }
}

impl ForcePolicy for PairwiseAttraction {
    fn apply(&self, bodies: &mut [RigidBody]) {
        let n = bodies.len();
        // Forces are computed from positions at the start of the pass, then added.
        let mut forces = vec![Vec2::zero(); n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = bodies[j].pos - bodies[i].pos;
                let dist = delta.magnitude().max(self.min_distance);
                let magnitude = self.g * bodies[i].mass * bodies[j].mass / (dist * dist);
                // Coincident centres normalise to zero: no direction, no force.
                forces[i] += delta.normalize() * magnitude;
            }
        }

        for (body, force) in bodies.iter_mut().zip(forces) {
            body.apply_force(force);
        }
    }
}

/// Run the configured policy. Nothing is applied while gravity is off.
pub fn apply_forces(config: &SimConfig, bodies: &mut [RigidBody]) {
    if !config.gravity_enabled {
        return;
    }
    match config.force_mode {
        ForceMode::UniformGravity => UniformGravity::from_config(config).apply(bodies),
        ForceMode::PairwiseAttraction => PairwiseAttraction::from_config(config).apply(bodies),
    }
}
