use serde::Deserialize;

use crate::rigid_body::{RigidBody, Vec2};

use super::category::Category;

pub const DEFAULT_SPAWN_MASS: f64 = 5.0;

/// Partial body update. Every field is independently present or absent.
///
/// Accepts the browser payload shape: `{ "x", "y", "vx", "vy", "mass", "size",
/// "elasticity", "type" }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BodyPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub vx: Option<f64>,
    pub vy: Option<f64>,
    pub mass: Option<f64>,
    pub size: Option<f64>,
    pub elasticity: Option<f64>,
    #[serde(rename = "type", alias = "category")]
    pub category: Option<Category>,
}

impl BodyPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Self::default() }
    }

    /// Overwrite only the supplied fields of an existing body.
    ///
    /// Position needs both coordinates. Velocity needs at least one component,
    /// the missing one becomes 0.
    pub fn apply_to(&self, body: &mut RigidBody) {
        if let (Some(x), Some(y)) = (self.x, self.y) {
            body.pos = Vec2::new(x, y);
        }
        if self.vx.is_some() || self.vy.is_some() {
            body.velocity = Vec2::new(self.vx.unwrap_or(0.0), self.vy.unwrap_or(0.0));
        }
        if let Some(mass) = self.mass {
            body.mass = mass;
        }
        if let Some(size) = self.size {
            body.set_size(size);
        }
        if let Some(elasticity) = self.elasticity {
            body.elasticity = elasticity;
        }
        if let Some(category) = self.category {
            body.category = category;
        }
    }

    /// Build a fresh body, filling absent fields with spawn defaults.
    pub fn to_body(&self, default_elasticity: f64) -> RigidBody {
        let mass = self.mass.unwrap_or(DEFAULT_SPAWN_MASS);
        let size = self.size.unwrap_or(mass);
        let mut body = RigidBody::new(
            Vec2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0)),
            mass,
            size,
            self.elasticity.unwrap_or(default_elasticity),
            self.category.unwrap_or_default(),
        );
        body.velocity = Vec2::new(self.vx.unwrap_or(0.0), self.vy.unwrap_or(0.0));
        body
    }
}
