//! Bounce Engine - 2D circle-body physics for the arena sandbox
//!
//! A handful of circular bodies fall, collide elastically and bounce off the
//! arena walls. The browser shell issues commands (spawn/move a body, toggle
//! gravity, set decay/elasticity) and polls one snapshot per frame.
//!
//! Architecture:
//! - core/          - Error type, logging glue
//! - domain/        - Categories, config, update payloads, scenarios
//! - systems/       - Bodies, force policies, step pipeline
//! - simulation/    - World orchestration and wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use systems::forces;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::install(log::Level::Info);
    log::info!("Bounce engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, EngineResult};
pub use domain::{BodyPatch, Category, ForceMode, Scenario, SimConfig};
pub use rigid_body::{RigidBody, Vec2};
pub use simulation::{BodySnapshot, PerfStats, Status, UpsertOutcome, World, WorldCore};
