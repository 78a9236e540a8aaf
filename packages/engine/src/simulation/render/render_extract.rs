use serde::Serialize;

use crate::domain::Category;
use crate::rigid_body::RigidBody;

use super::WorldCore;

/// Floats per body in the flat render buffer: x, y, radius, category id.
pub const RENDER_STRIDE: usize = 4;

/// Read-only view of one body, in body index order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub x: f64,
    pub y: f64,
    pub mass: f64,
    pub size: f64,
    pub radius: f64,
    #[serde(rename = "type")]
    pub category: Category,
}

impl From<&RigidBody> for BodySnapshot {
    fn from(body: &RigidBody) -> Self {
        Self {
            x: body.pos.x,
            y: body.pos.y,
            mass: body.mass,
            size: body.size(),
            radius: body.radius(),
            category: body.category,
        }
    }
}

pub(super) fn snapshots(world: &WorldCore) -> Vec<BodySnapshot> {
    world.rigid_bodies.bodies().iter().map(BodySnapshot::from).collect()
}

pub(super) fn snapshots_json(world: &WorldCore) -> String {
    // Non-finite floats serialize as null rather than failing.
    serde_json::to_string(&snapshots(world)).unwrap_or_else(|e| {
        log::error!("snapshot encoding failed: {}", e);
        String::from("[]")
    })
}

/// Write `[x, y, radius, category]` per body, tightly packed.
pub(super) fn extract_render_buffer(world: &mut WorldCore) -> *const f64 {
    let buf = &mut world.render_buffer;
    buf.clear();
    for body in world.rigid_bodies.bodies() {
        buf.push(body.pos.x);
        buf.push(body.pos.y);
        buf.push(body.radius());
        buf.push(body.category.id() as f64);
    }
    buf.as_ptr()
}
