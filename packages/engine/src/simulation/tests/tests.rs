use super::*;
use crate::domain::{Category, ForceMode};
use crate::rigid_body::Vec2;

const EPS: f64 = 1e-9;

fn empty_world() -> WorldCore {
    let mut scenario = Scenario::default_scene();
    scenario.bodies.clear();
    WorldCore::from_scenario(scenario)
}

fn spawn(world: &mut WorldCore, x: f64, y: f64, mass: f64, size: f64) -> usize {
    let patch = BodyPatch {
        mass: Some(mass),
        size: Some(size),
        ..BodyPatch::position(x, y)
    };
    world.upsert(None, &patch).index()
}

#[test]
fn gravity_step_uses_post_update_velocity() {
    let mut world = empty_world();
    let i = spawn(&mut world, 200.0, 200.0, 8.0, 8.0);

    let snap = world.step();

    let body = world.body(i).unwrap();
    // a = (9.8 * 8) / 8, v = a * dt, y += v * dt; 0.98 rather than 7.84,
    // see "Gravity scenario numbers" in DESIGN.md
    assert!((body.velocity.y - 0.98).abs() < EPS);
    assert!((body.pos.y - 200.098).abs() < EPS);
    assert_eq!(body.velocity.x, 0.0);
    assert_eq!(body.force, Vec2::zero());
    assert!((snap[i].y - 200.098).abs() < EPS);
    assert_eq!(snap[i].radius, 32.0);
}

#[test]
fn free_body_moves_at_constant_velocity() {
    let mut world = empty_world();
    world.set_gravity_enabled(false);
    let i = spawn(&mut world, 100.0, 100.0, 3.0, 2.0);
    world.upsert(Some(i), &BodyPatch { vx: Some(4.0), vy: Some(-2.0), ..BodyPatch::default() });

    for _ in 0..5 {
        world.step();
    }

    let body = world.body(i).unwrap();
    assert_eq!(body.velocity, Vec2::new(4.0, -2.0));
    assert!((body.pos.x - 102.0).abs() < EPS);
    assert!((body.pos.y - 99.0).abs() < EPS);
}

#[test]
fn head_on_equal_masses_exchange_velocities() {
    let mut world = empty_world();
    world.set_gravity_enabled(false);
    world.set_default_elasticity(1.0);
    let a = spawn(&mut world, 390.0, 300.0, 5.0, 2.0);
    let b = spawn(&mut world, 400.0, 300.0, 5.0, 2.0);
    world.upsert(Some(a), &BodyPatch { vx: Some(3.0), ..BodyPatch::default() });
    world.upsert(Some(b), &BodyPatch { vx: Some(-3.0), ..BodyPatch::default() });

    world.step();

    assert!((world.body(a).unwrap().velocity.x + 3.0).abs() < EPS);
    assert!((world.body(b).unwrap().velocity.x - 3.0).abs() < EPS);
}

#[test]
fn sticky_body_stops_after_collision() {
    let mut world = empty_world();
    world.set_gravity_enabled(false);
    let sticky = world
        .upsert(
            None,
            &BodyPatch {
                vx: Some(5.0),
                category: Some(Category::Sticky),
                size: Some(2.0),
                ..BodyPatch::position(300.0, 300.0)
            },
        )
        .index();
    spawn(&mut world, 310.0, 300.0, 5.0, 2.0);

    world.step();

    assert_eq!(world.body(sticky).unwrap().velocity, Vec2::zero());
}

#[test]
fn sticky_body_stops_on_side_wall() {
    let mut world = empty_world();
    let sticky = world
        .upsert(
            None,
            &BodyPatch {
                vx: Some(-50.0),
                vy: Some(20.0),
                size: Some(2.0),
                category: Some(Category::Sticky),
                ..BodyPatch::position(9.0, 300.0)
            },
        )
        .index();

    world.step();

    let body = world.body(sticky).unwrap();
    assert_eq!(body.velocity, Vec2::zero());
    assert_eq!(body.pos.x, 8.0);
}

#[test]
fn resting_on_floor_snaps_to_zero() {
    let mut world = empty_world();
    world.set_gravity_enabled(false);
    // radius 8, already touching the floor, creeping down
    let i = world
        .upsert(
            None,
            &BodyPatch { vy: Some(0.005), size: Some(2.0), ..BodyPatch::position(400.0, 592.0) },
        )
        .index();

    world.step();

    let body = world.body(i).unwrap();
    assert_eq!(body.pos.y, 592.0);
    assert_eq!(body.velocity.y, 0.0);
}

#[test]
fn upsert_appends_on_unknown_index() {
    let mut world = WorldCore::new();
    let n = world.body_count();

    let outcome = world.upsert(Some(n + 10), &BodyPatch::position(50.0, 60.0));
    assert_eq!(outcome, UpsertOutcome::Appended(n));
    assert_eq!(world.body_count(), n + 1);

    let outcome = world.upsert(Some(0), &BodyPatch::position(1.0, 2.0));
    assert_eq!(outcome, UpsertOutcome::Updated(0));
    assert_eq!(world.body(0).unwrap().pos, Vec2::new(1.0, 2.0));
}

#[test]
fn body_out_of_range_is_invalid_index() {
    let world = empty_world();
    assert_eq!(
        world.body(3).unwrap_err(),
        EngineError::InvalidIndex { index: 3, len: 0 }
    );
}

#[test]
fn upsert_json_accepts_browser_payload() {
    let mut world = empty_world();
    let outcome = world
        .upsert_json(
            Some(0),
            r#"{ "index": 0, "x": 120, "y": 80, "vx": 0, "vy": 0, "mass": 10, "size": 3, "elasticity": 0.5, "type": "bouncy" }"#,
        )
        .unwrap();

    assert_eq!(outcome, UpsertOutcome::Appended(0));
    let body = world.body(0).unwrap();
    assert_eq!(body.category, Category::Bouncy);
    assert_eq!(body.radius(), 12.0);
    assert_eq!(body.mass, 10.0);
}

#[test]
fn upsert_json_rejects_malformed_payload() {
    let mut world = empty_world();
    assert!(world.upsert_json(None, "{ not json").is_err());
    assert_eq!(world.body_count(), 0);
}

#[test]
fn elasticity_set_directly_is_overwritten_by_step() {
    let mut world = empty_world();
    world.set_default_elasticity(0.4);
    let i = world
        .upsert(None, &BodyPatch { elasticity: Some(0.9), ..BodyPatch::position(400.0, 300.0) })
        .index();
    assert_eq!(world.body(i).unwrap().elasticity, 0.9);

    world.step();
    assert_eq!(world.body(i).unwrap().elasticity, 0.4);
}

#[test]
fn reset_restores_initial_bodies() {
    let mut world = WorldCore::new();
    let initial = world.bodies();

    world.upsert(Some(0), &BodyPatch { size: Some(20.0), mass: Some(1.0), ..BodyPatch::position(5.0, 5.0) });
    world.upsert(None, &BodyPatch::position(10.0, 10.0));
    for _ in 0..50 {
        world.step();
    }

    world.reset();
    assert_eq!(world.bodies(), initial);
    for i in 0..world.body_count() {
        let body = world.body(i).unwrap();
        assert_eq!(body.velocity, Vec2::zero());
        assert_eq!(body.force, Vec2::zero());
    }

    world.reset();
    assert_eq!(world.bodies(), initial);
}

#[test]
fn settings_and_status() {
    let mut world = empty_world();
    assert_eq!(world.status(), Status { decay_enabled: false, gravity_enabled: true });

    assert!(!world.toggle_gravity());
    assert!(world.toggle_decay());
    assert_eq!(world.status(), Status { decay_enabled: true, gravity_enabled: false });

    world.set_decay_factor(0.5);
    assert!((world.config().decay_factor - 0.95).abs() < EPS);

    world.set_default_elasticity(-2.0);
    assert_eq!(world.config().default_elasticity, 0.0);
    world.set_default_elasticity(0.3);
    assert_eq!(world.config().default_elasticity, 0.3);

    world.set_gravity_magnitude(1.5);
    assert_eq!(world.config().gravity_magnitude, 1.5);
}

#[test]
fn decay_slows_bodies() {
    let mut world = empty_world();
    world.set_gravity_enabled(false);
    world.set_decay_enabled(true);
    world.set_decay_factor(1.0);
    let i = world
        .upsert(None, &BodyPatch { vx: Some(10.0), ..BodyPatch::position(400.0, 300.0) })
        .index();

    world.step();

    let expected = 10.0 * 0.9f64.powf(0.1);
    assert!((world.body(i).unwrap().velocity.x - expected).abs() < EPS);
}

#[test]
fn heavy_gravity_reduced_only_with_decay() {
    let mut world = empty_world();
    let heavy = BodyPatch {
        mass: Some(10.0),
        category: Some(Category::Heavy),
        ..BodyPatch::position(400.0, 100.0)
    };
    let i = world.upsert(None, &heavy).index();

    world.step();
    assert!((world.body(i).unwrap().velocity.y - 0.98).abs() < EPS);

    world.reset();
    let i = world.upsert(None, &heavy).index();
    world.set_decay_enabled(true);
    world.set_decay_factor(0.0);
    world.step();
    assert!((world.body(i).unwrap().velocity.y - 0.98 * 0.7).abs() < EPS);
}

#[test]
fn pairwise_attraction_pulls_bodies_together() {
    let mut world = empty_world();
    world.set_force_mode(ForceMode::PairwiseAttraction);
    let a = spawn(&mut world, 200.0, 300.0, 5.0, 1.0);
    let b = spawn(&mut world, 600.0, 300.0, 5.0, 1.0);

    world.step();

    assert!(world.body(a).unwrap().velocity.x > 0.0);
    assert!(world.body(b).unwrap().velocity.x < 0.0);
    assert_eq!(world.body(a).unwrap().velocity.y, 0.0);
}

#[test]
fn scenario_with_zero_attraction_floor_is_rejected() {
    let json = r#"{
        "config": { "force_mode": "pairwise_attraction", "attraction_min_distance": 0.0 },
        "bodies": [ { "x": 300, "y": 300, "mass": 2 }, { "x": 300, "y": 300, "mass": 3 } ]
    }"#;
    assert!(matches!(
        WorldCore::from_scenario_json(json),
        Err(EngineError::InvalidConfiguration(_))
    ));
}

#[test]
fn coincident_bodies_attract_without_nan() {
    let mut world = empty_world();
    world.set_force_mode(ForceMode::PairwiseAttraction);
    spawn(&mut world, 300.0, 300.0, 2.0, 1.0);
    spawn(&mut world, 300.0, 300.0, 3.0, 1.0);

    world.step();

    for snap in world.bodies() {
        assert!(snap.x.is_finite() && snap.y.is_finite());
    }
}

#[test]
fn damped_wall_hit_below_threshold_rests() {
    let mut world = empty_world();
    world.set_gravity_enabled(false);
    world.set_default_elasticity(0.5);
    // radius 20 against the right wall
    let i = world
        .upsert(None, &BodyPatch { vx: Some(0.015), size: Some(5.0), ..BodyPatch::position(779.999, 300.0) })
        .index();

    world.step();

    let body = world.body(i).unwrap();
    assert_eq!(body.pos.x, 780.0);
    assert_eq!(body.velocity.x, 0.0);
}

#[test]
fn coincident_bodies_separate_along_x() {
    let mut world = empty_world();
    world.set_gravity_enabled(false);
    let a = spawn(&mut world, 400.0, 300.0, 1.0, 1.0);
    let b = spawn(&mut world, 400.0, 300.0, 1.0, 1.0);

    world.step();

    let (pa, pb) = (world.body(a).unwrap().pos, world.body(b).unwrap().pos);
    assert!(pa.x < 400.0 && pb.x > 400.0);
    assert_eq!(pa.y, 300.0);
    assert_eq!(pb.y, 300.0);
}

#[test]
fn zero_mass_body_steps_without_panicking() {
    let mut world = empty_world();
    let i = world
        .upsert(None, &BodyPatch { mass: Some(0.0), size: Some(0.0), ..BodyPatch::position(400.0, 300.0) })
        .index();
    spawn(&mut world, 400.0, 300.0, 0.0, 1.0);

    world.step();

    let body = world.body(i).unwrap();
    assert!(body.pos.x.is_finite() && body.pos.y.is_finite());
    assert_eq!(body.acceleration, Vec2::zero());
}

#[test]
fn snapshot_json_shape() {
    let mut world = empty_world();
    world.upsert(
        None,
        &BodyPatch { mass: Some(2.0), category: Some(Category::Heavy), ..BodyPatch::position(10.0, 20.0) },
    );

    let json = world.bodies_json();
    assert_eq!(
        json,
        r#"[{"x":10.0,"y":20.0,"mass":2.0,"size":2.0,"radius":8.0,"type":"heavy"}]"#
    );
}

#[test]
fn render_buffer_is_packed() {
    let mut world = WorldCore::new();
    let n = world.body_count();

    let ptr = world.extract_render_buffer();
    assert!(!ptr.is_null());
    assert_eq!(world.render_buffer_len(), n * RENDER_STRIDE);
    assert_eq!(world.render_buffer[0], world.body(0).unwrap().pos.x);
    assert_eq!(world.render_buffer[2], world.body(0).unwrap().radius());
    assert_eq!(world.render_buffer[7], Category::Heavy.id() as f64);
}

#[test]
fn perf_counters_only_when_enabled() {
    let mut world = WorldCore::new();
    world.step();
    assert_eq!(world.get_perf_stats().pair_checks(), 0);

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.body_count(), 3);
    assert_eq!(stats.pair_checks(), 3);
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(world.frame(), 2);
}
