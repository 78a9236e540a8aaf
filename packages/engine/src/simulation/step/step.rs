use crate::rigid_body_system::arena_of;

use super::{PerfTimer, WorldCore};

/// One fixed-order step over every body.
pub(super) fn step(world: &mut WorldCore) {
    if world.perf_enabled {
        step_with_perf(world);
    } else {
        world.rigid_bodies.update(&world.config);
    }
    world.frame += 1;
}

/// Same phases as `RigidBodySystem::update`, timed one by one.
fn step_with_perf(world: &mut WorldCore) {
    world.perf_stats.reset();
    world.perf_stats.body_count = world.rigid_bodies.body_count() as u32;
    let step_start = PerfTimer::start();

    let config = &world.config;
    let bodies = &mut world.rigid_bodies;
    let stats = &mut world.perf_stats;

    // === FORCES ===
    PerfTimer::timed(&mut stats.forces_ms, || {
        bodies.apply_forces(config);
        bodies.refresh_elasticity(config.default_elasticity);
    });

    // === INTEGRATION + DECAY ===
    PerfTimer::timed(&mut stats.integrate_ms, || {
        bodies.integrate(config.dt);
        if config.decay_enabled {
            bodies.apply_decay(config.decay_factor, config.dt);
        }
    });

    // === COLLISIONS ===
    let contacts = PerfTimer::timed(&mut stats.collisions_ms, || bodies.resolve_collisions());

    // === ARENA ===
    let arena = arena_of(config);
    let wall_contacts = PerfTimer::timed(&mut stats.boundary_ms, || bodies.contain(&arena));

    stats.pair_checks = contacts.pair_checks;
    stats.contacts = contacts.contacts;
    stats.wall_contacts = wall_contacts;
    stats.step_ms = step_start.elapsed_ms();
}
