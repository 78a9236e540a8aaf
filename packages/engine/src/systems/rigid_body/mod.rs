//! RigidBody - a circular point-mass
//!
//! Bodies carry position/velocity/force, a mass, a size with a cached radius,
//! and a category that drives elasticity and some force/contact rules.
//! No rotation.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{RigidBody, RADIUS_PER_SIZE};
