//! Starting configuration for a world.
//!
//! A scenario is a config plus the bodies present at construction. The world
//! freezes these bodies as its reset target.

use serde::Deserialize;

use crate::core::{EngineError, EngineResult};
use crate::rigid_body::RigidBody;

use super::category::Category;
use super::config::SimConfig;
use super::patch::BodyPatch;

/// `Scenario::default()` is the built-in scene; fields missing from JSON
/// fall back to the default config and no bodies.
#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SimConfig,
    #[serde(default)]
    pub bodies: Vec<BodyPatch>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::default_scene()
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let mut scenario: Scenario = serde_json::from_str(json)?;
        scenario.config.validate()?;
        for (i, body) in scenario.bodies.iter().enumerate() {
            if body.x.is_none() || body.y.is_none() {
                return Err(EngineError::InvalidConfiguration(format!(
                    "scenario body {} is missing a position",
                    i
                )));
            }
        }
        Ok(scenario)
    }

    /// Three bodies resting in the arena: a normal, a heavy and a bouncy one.
    pub fn default_scene() -> Self {
        let body = |x: f64, y: f64, mass: f64, category: Category| BodyPatch {
            x: Some(x),
            y: Some(y),
            mass: Some(mass),
            size: Some(mass),
            category: Some(category),
            ..BodyPatch::default()
        };

        Self {
            config: SimConfig::default(),
            bodies: vec![
                body(200.0, 200.0, 8.0, Category::Normal),
                body(400.0, 150.0, 10.0, Category::Heavy),
                body(600.0, 250.0, 5.0, Category::Bouncy),
            ],
        }
    }

    pub(crate) fn build_bodies(&self) -> Vec<RigidBody> {
        self.bodies
            .iter()
            .map(|patch| patch.to_body(self.config.default_elasticity))
            .collect()
    }
}
