use crate::domain::category::Category;

use super::vec2::Vec2;

/// Rendered radius per unit of size.
pub const RADIUS_PER_SIZE: f64 = 4.0;

/// Circular point-mass moved by the step pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    // === Kinematic State ===
    pub pos: Vec2,
    pub velocity: Vec2,
    /// Acceleration computed by the last integration.
    pub acceleration: Vec2,
    /// Sum of forces applied this step; cleared by the integrator.
    pub force: Vec2,

    // === Shape / Material ===
    /// Zero is allowed and integrates with zero acceleration.
    pub mass: f64,
    size: f64,
    radius: f64,
    /// Overwritten from `category` at the start of every step.
    pub elasticity: f64,
    pub category: Category,
}

impl RigidBody {
    pub fn new(pos: Vec2, mass: f64, size: f64, elasticity: f64, category: Category) -> Self {
        Self {
            pos,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            force: Vec2::zero(),
            mass,
            size,
            radius: size * RADIUS_PER_SIZE,
            elasticity,
            category,
        }
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Change size and recompute the cached radius.
    pub fn set_size(&mut self, size: f64) {
        self.size = size;
        self.radius = size * RADIUS_PER_SIZE;
    }

    /// Accumulate a force for the current step.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Drop all motion state, keeping shape and material.
    pub fn clear_motion(&mut self) {
        self.velocity = Vec2::zero();
        self.acceleration = Vec2::zero();
        self.force = Vec2::zero();
    }

    #[inline]
    pub fn is_sticky(&self) -> bool {
        self.category == Category::Sticky
    }
}
