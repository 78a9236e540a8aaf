use crate::domain::Scenario;
use crate::rigid_body_system::RigidBodySystem;

use super::perf_stats::PerfStats;
use super::render_extract::RENDER_STRIDE;
use super::WorldCore;

pub(super) fn create_world_core(scenario: Scenario) -> WorldCore {
    let bodies = scenario.build_bodies();
    log::debug!("world created with {} bodies", bodies.len());

    WorldCore {
        render_buffer: Vec::with_capacity(bodies.len() * RENDER_STRIDE),
        initial: bodies.clone(),
        rigid_bodies: RigidBodySystem::from_bodies(bodies),
        config: scenario.config,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
