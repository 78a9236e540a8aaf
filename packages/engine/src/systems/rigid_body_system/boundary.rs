use crate::rigid_body::{RigidBody, Vec2};

/// Arena extents. Origin top-left, +y down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    /// Reflected speeds below this snap to zero.
    pub rest_threshold: f64,
}

/// Clamp a body inside the arena and bounce it off any wall it crossed.
///
/// Walls are checked floor, ceiling, left, right. Sticky bodies stop dead on
/// the side walls only. Returns the number of walls touched.
pub(super) fn contain(body: &mut RigidBody, arena: &Arena) -> u32 {
    let r = body.radius();
    let e = body.elasticity;
    let mut touched = 0;

    // Floor
    if body.pos.y + r > arena.height {
        body.pos.y = arena.height - r;
        body.velocity.y = bounce(body.velocity.y, e, arena.rest_threshold);
        touched += 1;
    }

    // Ceiling
    if body.pos.y - r < 0.0 {
        body.pos.y = r;
        body.velocity.y = bounce(body.velocity.y, e, arena.rest_threshold);
        touched += 1;
    }

    // Left wall
    if body.pos.x - r < 0.0 {
        body.pos.x = r;
        if body.is_sticky() {
            body.velocity = Vec2::zero();
        }
        body.velocity.x = bounce(body.velocity.x, e, arena.rest_threshold);
        touched += 1;
    }

    // Right wall
    if body.pos.x + r > arena.width {
        body.pos.x = arena.width - r;
        if body.is_sticky() {
            body.velocity = Vec2::zero();
        }
        body.velocity.x = bounce(body.velocity.x, e, arena.rest_threshold);
        touched += 1;
    }

    touched
}

/// Reflect one velocity component, or snap it to rest when either the
/// incoming or the reflected speed is below `threshold`.
#[inline]
fn bounce(v: f64, elasticity: f64, threshold: f64) -> f64 {
    let reflected = -v * elasticity;
    if v.abs() < threshold || reflected.abs() < threshold {
        0.0
    } else {
        reflected
    }
}
