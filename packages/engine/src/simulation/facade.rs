use wasm_bindgen::prelude::*;

use crate::domain::{BodyPatch, ForceMode};

use super::perf_stats::PerfStats;
use super::render_extract::RENDER_STRIDE;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the built-in scene
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    #[wasm_bindgen(js_name = fromScenarioJson)]
    pub fn from_scenario_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_scenario_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn arena_width(&self) -> f64 { self.core.config().arena_width }

    #[wasm_bindgen(getter)]
    pub fn arena_height(&self) -> f64 { self.core.config().arena_height }

    /// Step once and return the body snapshot as JSON
    pub fn step_json(&mut self) -> String {
        self.core.step_json()
    }

    /// Current body snapshot as JSON, without stepping
    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }

    /// Apply a partial body update; appends when `index` is missing or out of range.
    /// Returns the index of the touched body.
    pub fn upsert_json(&mut self, index: Option<u32>, json: &str) -> Result<u32, JsValue> {
        let outcome = self
            .core
            .upsert_json(index.map(|i| i as usize), json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(outcome.index() as u32)
    }

    /// Drag a body to (x, y)
    pub fn move_body(&mut self, index: u32, x: f64, y: f64) -> u32 {
        let patch = BodyPatch::position(x, y);
        self.core.upsert(Some(index as usize), &patch).index() as u32
    }

    /// Release a dragged body with a throw velocity
    pub fn set_velocity(&mut self, index: u32, vx: f64, vy: f64) -> u32 {
        let patch = BodyPatch { vx: Some(vx), vy: Some(vy), ..BodyPatch::default() };
        self.core.upsert(Some(index as usize), &patch).index() as u32
    }

    pub fn set_size(&mut self, index: u32, size: f64) -> u32 {
        let patch = BodyPatch { size: Some(size), ..BodyPatch::default() };
        self.core.upsert(Some(index as usize), &patch).index() as u32
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === SETTINGS ===

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.core.set_gravity_enabled(enabled);
    }

    pub fn set_gravity_magnitude(&mut self, magnitude: f64) {
        self.core.set_gravity_magnitude(magnitude);
    }

    pub fn set_decay_enabled(&mut self, enabled: bool) {
        self.core.set_decay_enabled(enabled);
    }

    pub fn set_decay_factor(&mut self, slider: f64) {
        self.core.set_decay_factor(slider);
    }

    pub fn set_default_elasticity(&mut self, elasticity: f64) {
        self.core.set_default_elasticity(elasticity);
    }

    /// Switch between uniform gravity and pairwise attraction
    pub fn set_pairwise_attraction(&mut self, enabled: bool) {
        let mode = if enabled {
            ForceMode::PairwiseAttraction
        } else {
            ForceMode::UniformGravity
        };
        self.core.set_force_mode(mode);
    }

    pub fn toggle_gravity(&mut self) -> bool {
        self.core.toggle_gravity()
    }

    pub fn toggle_decay(&mut self) -> bool {
        self.core.toggle_decay()
    }

    /// `{"decay": bool, "gravity": bool}`
    pub fn status_json(&self) -> String {
        serde_json::to_string(&self.core.status()).unwrap_or_default()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDER BUFFER ===

    /// Fill the render buffer (`[x, y, radius, category]` per body) and return its pointer
    pub fn extract_render_buffer(&mut self) -> *const f64 {
        self.core.extract_render_buffer()
    }

    pub fn render_buffer_len(&self) -> usize {
        self.core.render_buffer_len()
    }

    pub fn render_stride(&self) -> usize {
        RENDER_STRIDE
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
