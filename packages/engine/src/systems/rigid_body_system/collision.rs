use crate::rigid_body::{RigidBody, Vec2};

/// Counters from one collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub pair_checks: u32,
    pub contacts: u32,
}

/// Check every unordered pair once, in index order.
pub(super) fn resolve_all(bodies: &mut [RigidBody]) -> ContactStats {
    let mut stats = ContactStats::default();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            stats.pair_checks += 1;
            if resolve_pair(&mut head[i], &mut tail[0]) {
                stats.contacts += 1;
            }
        }
    }

    stats
}

/// Separate and bounce two overlapping circles. Returns false (and touches
/// nothing) when they do not overlap.
pub(super) fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let mut delta = b.pos - a.pos;
    let mut dist = delta.magnitude();
    if dist == 0.0 {
        // Coincident centres: pick +x so the result is deterministic.
        delta = Vec2::new(1.0, 0.0);
        dist = 1.0;
    }

    let overlap = (a.radius() + b.radius()) - dist;
    if overlap <= 0.0 {
        return false;
    }

    let normal = delta / dist;
    let tangent = normal.perp();

    let m1 = a.mass;
    let m2 = b.mass;
    let total = m1 + m2;

    // Each body moves by the other's share of the mass, so heavier bodies move less.
    // A zero total splits evenly.
    let (share_a, share_b) = if total == 0.0 {
        (0.5, 0.5)
    } else {
        (m2 / total, m1 / total)
    };
    a.pos -= normal * (overlap * share_a);
    b.pos += normal * (overlap * share_b);

    let v1n = a.velocity.dot(normal);
    let v1t = a.velocity.dot(tangent);
    let v2n = b.velocity.dot(normal);
    let v2t = b.velocity.dot(tangent);

    let e = (a.elasticity + b.elasticity) / 2.0;
    let (v1n_new, v2n_new) = if total == 0.0 {
        (e * v2n, e * v1n)
    } else {
        (
            e * ((v1n * (m1 - m2) + 2.0 * m2 * v2n) / total),
            e * ((v2n * (m2 - m1) + 2.0 * m1 * v1n) / total),
        )
    };

    // Tangential components pass through (frictionless).
    a.velocity = tangent * v1t + normal * v1n_new;
    b.velocity = tangent * v2t + normal * v2n_new;

    if a.is_sticky() {
        a.velocity = Vec2::zero();
    }
    if b.is_sticky() {
        b.velocity = Vec2::zero();
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    const EPS: f64 = 1e-9;

    fn ball(x: f64, y: f64, mass: f64, size: f64) -> RigidBody {
        RigidBody::new(Vec2::new(x, y), mass, size, 1.0, Category::Normal)
    }

    #[test]
    fn separated_bodies_are_untouched() {
        let mut a = ball(0.0, 0.0, 1.0, 1.0);
        let mut b = ball(100.0, 0.0, 1.0, 1.0);
        a.velocity = Vec2::new(1.0, 0.0);
        let (a0, b0) = (a.clone(), b.clone());

        assert!(!resolve_pair(&mut a, &mut b));
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn touching_exactly_is_not_a_collision() {
        // radii 4 + 4, centres 8 apart
        let mut a = ball(0.0, 0.0, 1.0, 1.0);
        let mut b = ball(8.0, 0.0, 1.0, 1.0);
        assert!(!resolve_pair(&mut a, &mut b));
    }

    #[test]
    fn equal_mass_head_on_swaps_velocities() {
        let mut a = ball(0.0, 0.0, 5.0, 2.0);
        let mut b = ball(10.0, 0.0, 5.0, 2.0);
        a.velocity = Vec2::new(3.0, 0.0);
        b.velocity = Vec2::new(-3.0, 0.0);

        assert!(resolve_pair(&mut a, &mut b));
        assert_eq!(a.velocity.x, -3.0);
        assert_eq!(b.velocity.x, 3.0);
        assert!(a.velocity.y.abs() < EPS);
        assert!(b.velocity.y.abs() < EPS);
    }

    #[test]
    fn momentum_along_normal_is_conserved() {
        let mut a = ball(0.0, 0.0, 2.0, 3.0);
        let mut b = ball(15.0, 9.0, 7.0, 3.0);
        a.velocity = Vec2::new(4.0, 1.5);
        b.velocity = Vec2::new(-2.0, 0.5);

        let normal = (b.pos - a.pos).normalize();
        let before = a.mass * a.velocity.dot(normal) + b.mass * b.velocity.dot(normal);
        let tangent = normal.perp();
        let (a_t, b_t) = (a.velocity.dot(tangent), b.velocity.dot(tangent));

        assert!(resolve_pair(&mut a, &mut b));

        let after = a.mass * a.velocity.dot(normal) + b.mass * b.velocity.dot(normal);
        assert!((before - after).abs() < EPS);
        assert!((a.velocity.dot(tangent) - a_t).abs() < EPS);
        assert!((b.velocity.dot(tangent) - b_t).abs() < EPS);
    }

    #[test]
    fn heavier_body_is_displaced_less() {
        let mut light = ball(0.0, 0.0, 1.0, 2.0);
        let mut heavy = ball(10.0, 0.0, 3.0, 2.0);

        assert!(resolve_pair(&mut light, &mut heavy));

        // overlap 6: light moves 6 * 3/4, heavy moves 6 * 1/4
        assert!((light.pos.x + 4.5).abs() < EPS);
        assert!((heavy.pos.x - 11.5).abs() < EPS);
        assert!(((heavy.pos - light.pos).magnitude() - 16.0).abs() < EPS);
    }

    #[test]
    fn coincident_centres_use_x_axis() {
        let mut a = ball(50.0, 50.0, 1.0, 1.0);
        let mut b = ball(50.0, 50.0, 1.0, 1.0);

        assert!(resolve_pair(&mut a, &mut b));

        // overlap = 8 - 1 = 7, split evenly along +x
        assert!((a.pos.x - 46.5).abs() < EPS);
        assert!((b.pos.x - 53.5).abs() < EPS);
        assert_eq!(a.pos.y, 50.0);
        assert_eq!(b.pos.y, 50.0);
    }

    #[test]
    fn zero_total_mass_stays_finite() {
        let mut a = ball(0.0, 0.0, 0.0, 1.0);
        let mut b = ball(4.0, 0.0, 0.0, 1.0);
        a.velocity = Vec2::new(1.0, 0.0);

        assert!(resolve_pair(&mut a, &mut b));
        assert!(a.pos.x.is_finite() && b.pos.x.is_finite());
        assert!(a.velocity.x.is_finite() && b.velocity.x.is_finite());
        assert!((b.velocity.x - 1.0).abs() < EPS);
    }

    #[test]
    fn restitution_is_averaged() {
        let mut a = ball(0.0, 0.0, 1.0, 2.0);
        let mut b = ball(10.0, 0.0, 1.0, 2.0);
        a.elasticity = 0.2;
        b.elasticity = 0.6;
        a.velocity = Vec2::new(2.0, 0.0);

        assert!(resolve_pair(&mut a, &mut b));
        assert!(a.velocity.x.abs() < EPS);
        assert!((b.velocity.x - 0.8).abs() < EPS);
    }

    #[test]
    fn sticky_body_stops_on_contact() {
        let mut sticky = ball(0.0, 0.0, 1.0, 2.0);
        sticky.category = Category::Sticky;
        let mut other = ball(10.0, 0.0, 1.0, 2.0);
        sticky.velocity = Vec2::new(5.0, 1.0);
        other.velocity = Vec2::new(-1.0, 0.0);

        assert!(resolve_pair(&mut sticky, &mut other));
        assert_eq!(sticky.velocity, Vec2::zero());
        assert!(other.velocity.x > 0.0);
    }

    #[test]
    fn resolve_all_checks_each_pair_once() {
        let mut bodies = vec![
            ball(0.0, 0.0, 1.0, 1.0),
            ball(100.0, 0.0, 1.0, 1.0),
            ball(200.0, 0.0, 1.0, 1.0),
            ball(203.0, 0.0, 1.0, 1.0),
        ];
        let stats = resolve_all(&mut bodies);
        assert_eq!(stats.pair_checks, 6);
        assert_eq!(stats.contacts, 1);
    }
}
