//! World - owns the bodies, the tunables and the reset snapshot
//!
//! `WorldCore` is plain Rust and is what tests drive. `World` (facade.rs) is
//! the wasm-bindgen wrapper the browser shell talks to.
//!
//! The engine is single-threaded: callers serialise `step` and every command.
//! Work is split across files the same way the step is:
//! - init/      construction and settings
//! - commands/  upsert / reset
//! - step/      the per-frame pipeline
//! - render/    snapshots, JSON and the flat render buffer

use crate::core::{EngineError, EngineResult};
use crate::domain::{BodyPatch, Scenario, SimConfig};
use crate::rigid_body::RigidBody;
use crate::rigid_body_system::RigidBodySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::UpsertOutcome;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::{BodySnapshot, RENDER_STRIDE};
pub use settings::Status;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    rigid_bodies: RigidBodySystem,
    config: SimConfig,
    /// Frozen at construction; the reset target.
    initial: Vec<RigidBody>,

    // State
    frame: u64,
    render_buffer: Vec<f64>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// World with the built-in scene.
    pub fn new() -> Self {
        init::create_world_core(Scenario::default_scene())
    }

    pub fn from_scenario(scenario: Scenario) -> Self {
        init::create_world_core(scenario)
    }

    pub fn from_scenario_json(json: &str) -> EngineResult<Self> {
        let scenario = Scenario::from_json(json)?;
        Ok(Self::from_scenario(scenario))
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.rigid_bodies.body_count() }

    pub fn body(&self, index: usize) -> EngineResult<&RigidBody> {
        self.rigid_bodies.body(index).ok_or(EngineError::InvalidIndex {
            index,
            len: self.rigid_bodies.body_count(),
        })
    }

    // === SETTINGS ===

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        settings::set_gravity_enabled(self, enabled);
    }

    pub fn set_gravity_magnitude(&mut self, magnitude: f64) {
        settings::set_gravity_magnitude(self, magnitude);
    }

    pub fn set_decay_enabled(&mut self, enabled: bool) {
        settings::set_decay_enabled(self, enabled);
    }

    /// Slider in `[0, 1]`, mapped to `1 - slider * 0.1`.
    pub fn set_decay_factor(&mut self, slider: f64) {
        settings::set_decay_factor(self, slider);
    }

    /// Clamped to `[0, 1]`.
    pub fn set_default_elasticity(&mut self, elasticity: f64) {
        settings::set_default_elasticity(self, elasticity);
    }

    pub fn set_force_mode(&mut self, mode: crate::domain::ForceMode) {
        settings::set_force_mode(self, mode);
    }

    /// Flip gravity and return the new state.
    pub fn toggle_gravity(&mut self) -> bool {
        settings::toggle_gravity(self)
    }

    /// Flip momentum decay and return the new state.
    pub fn toggle_decay(&mut self) -> bool {
        settings::toggle_decay(self)
    }

    pub fn status(&self) -> Status {
        settings::status(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === COMMANDS ===

    /// Update the body at `index`, or append a new one when `index` is absent
    /// or out of range.
    pub fn upsert(&mut self, index: Option<usize>, patch: &BodyPatch) -> UpsertOutcome {
        commands::upsert(self, index, patch)
    }

    pub fn upsert_json(&mut self, index: Option<usize>, json: &str) -> EngineResult<UpsertOutcome> {
        commands::upsert_json(self, index, json)
    }

    /// Replace the bodies with fresh copies of the initial set.
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    // === STEP / READ ===

    /// Advance one step and return the new snapshot.
    pub fn step(&mut self) -> Vec<BodySnapshot> {
        step::step(self);
        self.bodies()
    }

    /// Snapshot without advancing.
    pub fn bodies(&self) -> Vec<BodySnapshot> {
        render_extract::snapshots(self)
    }

    pub fn step_json(&mut self) -> String {
        step::step(self);
        self.bodies_json()
    }

    pub fn bodies_json(&self) -> String {
        render_extract::snapshots_json(self)
    }

    /// Fill the flat render buffer and return its pointer.
    pub fn extract_render_buffer(&mut self) -> *const f64 {
        render_extract::extract_render_buffer(self)
    }

    pub fn render_buffer_len(&self) -> usize {
        self.render_buffer.len()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
