use crate::domain::SimConfig;
use crate::forces::apply_forces;
use crate::rigid_body::RigidBody;

use super::boundary::{contain, Arena};
use super::collision::{resolve_all, ContactStats};
use super::integrate::integrate;

/// Owns the body collection and runs the per-step pipeline over it.
///
/// Bodies are addressed by index. They are only ever appended or mutated in
/// place, so an index stays valid until the whole set is replaced.
#[derive(Clone, Debug, Default)]
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    pub fn from_bodies(bodies: Vec<RigidBody>) -> Self {
        Self { bodies }
    }

    /// Append a body and return its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn body(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut RigidBody> {
        self.bodies.get_mut(index)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Swap in a new body set (used by reset).
    pub fn replace_all(&mut self, bodies: Vec<RigidBody>) {
        self.bodies = bodies;
    }

    // === Pipeline phases, in step order ===

    pub fn apply_forces(&mut self, config: &SimConfig) {
        apply_forces(config, &mut self.bodies);
    }

    /// Elasticity comes from the category every step; it is never carried over.
    pub fn refresh_elasticity(&mut self, default_elasticity: f64) {
        for body in self.bodies.iter_mut() {
            body.elasticity = body.category.elasticity(default_elasticity);
        }
    }

    pub fn integrate(&mut self, dt: f64) {
        for body in self.bodies.iter_mut() {
            integrate(body, dt);
        }
    }

    /// Scale velocities by `factor^dt`.
    pub fn apply_decay(&mut self, factor: f64, dt: f64) {
        let scale = factor.powf(dt);
        for body in self.bodies.iter_mut() {
            body.velocity = body.velocity * scale;
        }
    }

    pub fn resolve_collisions(&mut self) -> ContactStats {
        resolve_all(&mut self.bodies)
    }

    /// Returns the number of wall contacts.
    pub fn contain(&mut self, arena: &Arena) -> u32 {
        let mut contacts = 0;
        for body in self.bodies.iter_mut() {
            contacts += contain(body, arena);
        }
        contacts
    }

    /// Run every phase once.
    pub fn update(&mut self, config: &SimConfig) -> StepCounters {
        self.apply_forces(config);
        self.refresh_elasticity(config.default_elasticity);
        self.integrate(config.dt);
        if config.decay_enabled {
            self.apply_decay(config.decay_factor, config.dt);
        }
        let contacts = self.resolve_collisions();
        let wall_contacts = self.contain(&arena_of(config));

        StepCounters {
            pair_checks: contacts.pair_checks,
            contacts: contacts.contacts,
            wall_contacts,
        }
    }
}

/// What one step touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub pair_checks: u32,
    pub contacts: u32,
    pub wall_contacts: u32,
}

pub fn arena_of(config: &SimConfig) -> Arena {
    Arena {
        width: config.arena_width,
        height: config.arena_height,
        rest_threshold: config.rest_velocity_threshold,
    }
}
