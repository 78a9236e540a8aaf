use wasm_bindgen::prelude::*;

/// Timings and counters for the last step. All zero while perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collisions_ms: f64,
    pub(super) boundary_ms: f64,
    pub(super) body_count: u32,
    pub(super) pair_checks: u32,
    pub(super) contacts: u32,
    pub(super) wall_contacts: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions_ms(&self) -> f64 { self.collisions_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 { self.boundary_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u32 { self.wall_contacts }
}
