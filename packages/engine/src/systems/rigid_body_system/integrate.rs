use crate::rigid_body::{RigidBody, Vec2};

/// Semi-implicit Euler: velocity first, then position with the new velocity.
/// Clears the force accumulator.
pub(super) fn integrate(body: &mut RigidBody, dt: f64) {
    body.acceleration = if body.mass == 0.0 {
        Vec2::zero()
    } else {
        body.force / body.mass
    };
    body.velocity += body.acceleration * dt;
    body.pos += body.velocity * dt;
    body.force = Vec2::zero();
}
