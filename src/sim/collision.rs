//! Planet-planet collision checks
//!
//! Planets are circles whose radius is their `diameter` field (that is how
//! they are drawn). The integrator calls [`collision_check`] once per pair,
//! per tick, after the gravity update; what happens next is decided by the
//! configured [`CollisionPolicy`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::planet::Planet;

/// What the collision hook does with an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Skip the check entirely. Bodies pass through each other.
    #[default]
    Ignore,
    /// Report overlaps to the caller without touching trajectories.
    Detect,
    /// Push overlapping bodies apart and bounce them elastically.
    Resolve,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Ignore => "ignore",
            CollisionPolicy::Detect => "detect",
            CollisionPolicy::Resolve => "resolve",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ignore" | "off" => Some(CollisionPolicy::Ignore),
            "detect" => Some(CollisionPolicy::Detect),
            "resolve" | "bounce" => Some(CollisionPolicy::Resolve),
            _ => None,
        }
    }
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the circles overlap
    pub hit: bool,
    /// Contact point on the first body's rim
    pub point: Vec2,
    /// Unit normal pointing from the first body toward the second
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Circle-circle overlap test.
///
/// Coincident centres still count as a hit; the normal then falls back to
/// +X so the pair can be separated.
pub fn circle_overlap(a: &Planet, b: &Planet) -> CollisionResult {
    let offset = b.pos - a.pos;
    let dist = offset.length();
    let radii = a.diameter + b.diameter;

    if !dist.is_finite() || dist >= radii {
        return CollisionResult::miss();
    }

    let normal = if dist > 0.0 { offset / dist } else { Vec2::X };
    CollisionResult {
        hit: true,
        point: a.pos + normal * a.diameter,
        normal,
        penetration: radii - dist,
    }
}

/// Separate an overlapping pair and exchange an elastic impulse along the
/// contact normal. Heavier bodies move less.
pub fn resolve_collision(a: &mut Planet, b: &mut Planet, contact: &CollisionResult) {
    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let inv_sum = inv_a + inv_b;
    if !inv_sum.is_finite() || inv_sum <= 0.0 {
        return;
    }

    // Positional correction, split by inverse mass
    let correction = contact.normal * (contact.penetration / inv_sum);
    a.pos -= correction * inv_a;
    b.pos += correction * inv_b;

    // Only bounce if approaching along the normal
    let closing = (b.vel - a.vel).dot(contact.normal);
    if closing >= 0.0 {
        return;
    }
    let impulse = contact.normal * (-2.0 * closing / inv_sum);
    a.vel -= impulse * inv_a;
    b.vel += impulse * inv_b;
}

/// The per-pair hook. Returns the contact if the pair overlaps and the
/// policy looks for overlaps at all.
pub fn collision_check(
    policy: CollisionPolicy,
    a: &mut Planet,
    b: &mut Planet,
) -> Option<CollisionResult> {
    if policy == CollisionPolicy::Ignore {
        return None;
    }

    let contact = circle_overlap(a, b);
    if !contact.hit {
        return None;
    }
    if policy == CollisionPolicy::Resolve {
        resolve_collision(a, b, &contact);
    }
    Some(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f32, y: f32, mass: f32, radius: f32, vel: Vec2) -> Planet {
        Planet::new("test", mass, radius, Vec2::new(x, y), vel)
    }

    #[test]
    fn test_circle_overlap_miss() {
        let a = body(0.0, 0.0, 1.0, 10.0, Vec2::ZERO);
        let b = body(25.0, 0.0, 1.0, 10.0, Vec2::ZERO);
        assert!(!circle_overlap(&a, &b).hit);
    }

    #[test]
    fn test_circle_overlap_hit() {
        let a = body(0.0, 0.0, 1.0, 10.0, Vec2::ZERO);
        let b = body(15.0, 0.0, 1.0, 10.0, Vec2::ZERO);
        let result = circle_overlap(&a, &b);
        assert!(result.hit);
        assert!((result.penetration - 5.0).abs() < 0.001);
        assert!((result.normal - Vec2::X).length() < 0.001);
        assert!((result.point - Vec2::new(10.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_circle_overlap_coincident() {
        let a = body(3.0, 3.0, 1.0, 1.0, Vec2::ZERO);
        let b = body(3.0, 3.0, 1.0, 1.0, Vec2::ZERO);
        let result = circle_overlap(&a, &b);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::X);
        assert!((result.penetration - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_ignore_policy_leaves_bodies_alone() {
        let mut a = body(0.0, 0.0, 1.0, 10.0, Vec2::X);
        let mut b = body(5.0, 0.0, 1.0, 10.0, -Vec2::X);
        let (a0, b0) = (a, b);
        assert!(collision_check(CollisionPolicy::Ignore, &mut a, &mut b).is_none());
        assert_eq!((a, b), (a0, b0));
    }

    #[test]
    fn test_detect_policy_reports_only() {
        let mut a = body(0.0, 0.0, 1.0, 10.0, Vec2::X);
        let mut b = body(5.0, 0.0, 1.0, 10.0, -Vec2::X);
        let (a0, b0) = (a, b);
        let contact = collision_check(CollisionPolicy::Detect, &mut a, &mut b);
        assert!(contact.is_some_and(|c| c.hit));
        assert_eq!((a, b), (a0, b0));
    }

    #[test]
    fn test_resolve_equal_masses_swap_velocities() {
        let mut a = body(0.0, 0.0, 2.0, 10.0, Vec2::new(1.0, 0.0));
        let mut b = body(15.0, 0.0, 2.0, 10.0, Vec2::new(-1.0, 0.0));
        collision_check(CollisionPolicy::Resolve, &mut a, &mut b);

        assert!((a.vel - Vec2::new(-1.0, 0.0)).length() < 0.001);
        assert!((b.vel - Vec2::new(1.0, 0.0)).length() < 0.001);
        // Separated to exactly touching
        assert!(((b.pos - a.pos).length() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_resolve_conserves_momentum() {
        let mut a = body(0.0, 0.0, 500.0, 75.0, Vec2::new(0.5, 0.0));
        let mut b = body(80.0, 10.0, 20.0, 30.0, Vec2::new(-3.0, 1.0));
        let before = a.momentum() + b.momentum();
        collision_check(CollisionPolicy::Resolve, &mut a, &mut b);
        let after = a.momentum() + b.momentum();
        assert!((before - after).length() < 0.01);
    }

    #[test]
    fn test_resolve_separating_pair_keeps_velocity() {
        let mut a = body(0.0, 0.0, 1.0, 10.0, Vec2::new(-1.0, 0.0));
        let mut b = body(15.0, 0.0, 1.0, 10.0, Vec2::new(1.0, 0.0));
        collision_check(CollisionPolicy::Resolve, &mut a, &mut b);
        assert_eq!(a.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(CollisionPolicy::from_str("Detect"), Some(CollisionPolicy::Detect));
        assert_eq!(CollisionPolicy::from_str("bounce"), Some(CollisionPolicy::Resolve));
        assert_eq!(CollisionPolicy::from_str("explode"), None);
        assert_eq!(CollisionPolicy::Resolve.as_str(), "resolve");
    }
}
