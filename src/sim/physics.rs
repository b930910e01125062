//! Pairwise Newtonian gravity
//!
//! Direct O(n²) summation over every unordered pair of live planets, with a
//! unit time step: each pair's force is applied as a velocity kick and the
//! kicked velocities are immediately added to the positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionPolicy, CollisionResult, collision_check};
use super::planet::{Planet, PlanetPool};
use crate::consts::GRAVITY;
use crate::error::{SimError, SimResult};

/// How the pair loop turns forces into motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationScheme {
    /// Kick and drift both bodies inside every pair, in slot order. A body
    /// that takes part in k pairs drifts k times per tick and later pairs see
    /// the updated state. Order-dependent.
    #[default]
    Sequential,
    /// Sum every pair's kick from the start-of-tick state, then apply one
    /// kick and one drift per body. Order-independent, numerically different.
    Accumulated,
}

/// An overlap reported by the collision hook
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Slot indices `(i, j)`, `i < j`
    pub pair: (usize, usize),
    pub result: CollisionResult,
}

/// What happened during one [`Integrator::step`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Number of pairs visited
    pub pairs: usize,
    /// Pairs whose force update was skipped because the bodies coincide
    pub degenerate: Vec<(usize, usize)>,
    /// Overlaps found by the collision hook
    pub contacts: Vec<Contact>,
}

impl StepReport {
    /// `Err(DegenerateDistance)` if any pair was skipped
    pub fn check(&self) -> SimResult<()> {
        if self.degenerate.is_empty() {
            Ok(())
        } else {
            Err(SimError::DegenerateDistance {
                pairs: self.degenerate.clone(),
            })
        }
    }
}

/// Velocity kicks `(dv_a, dv_b)` gravity gives a pair over one unit step.
///
/// `None` when the bodies coincide or the result would not be finite.
pub fn pair_kick(a: &Planet, b: &Planet, gravity: f32) -> Option<(Vec2, Vec2)> {
    let distance = b.pos - a.pos;
    let magnitude = distance.length();
    if magnitude == 0.0 {
        return None;
    }

    let force = gravity * a.mass * b.mass / (magnitude * magnitude);
    let unit = distance / magnitude;

    let dv_a = force * unit / a.mass;
    let dv_b = -force * unit / b.mass;
    (dv_a.is_finite() && dv_b.is_finite()).then_some((dv_a, dv_b))
}

/// Kick both velocities, then drift both positions with the new velocities.
///
/// Returns `false`, leaving both bodies untouched, for a degenerate pair.
pub fn update_pairwise(a: &mut Planet, b: &mut Planet, gravity: f32) -> bool {
    let Some((dv_a, dv_b)) = pair_kick(a, b, gravity) else {
        return false;
    };

    a.vel += dv_a;
    b.vel += dv_b;

    a.pos += a.vel;
    b.pos += b.vel;
    true
}

/// Stateless stepper over a [`PlanetPool`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    pub gravity: f32,
    pub collision: CollisionPolicy,
    pub scheme: IntegrationScheme,
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            collision: CollisionPolicy::default(),
            scheme: IntegrationScheme::default(),
        }
    }
}

impl Integrator {
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    pub fn with_collision(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    pub fn with_scheme(mut self, scheme: IntegrationScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Advance every live planet by one tick
    pub fn step(&self, pool: &mut PlanetPool) -> StepReport {
        let report = match self.scheme {
            IntegrationScheme::Sequential => self.step_sequential(pool),
            IntegrationScheme::Accumulated => self.step_accumulated(pool),
        };

        if !report.degenerate.is_empty() {
            log::warn!(
                "Skipped {} coincident pair(s): {:?}",
                report.degenerate.len(),
                report.degenerate
            );
        }
        if self.collision == CollisionPolicy::Detect && !report.contacts.is_empty() {
            log::warn!("{} unresolved collision(s)", report.contacts.len());
        }
        log::debug!(
            "Step: {} planets, {} pairs, {} contacts",
            pool.len(),
            report.pairs,
            report.contacts.len()
        );
        report
    }

    fn step_sequential(&self, pool: &mut PlanetPool) -> StepReport {
        let n = pool.len();
        let mut report = StepReport::default();

        for i in 0..n {
            for j in (i + 1)..n {
                let outcome = pool.with_pair(i, j, |a, b| {
                    let moved = update_pairwise(a, b, self.gravity);
                    (moved, collision_check(self.collision, a, b))
                });
                if let Some((moved, contact)) = outcome {
                    record(&mut report, (i, j), moved, contact);
                }
            }
        }
        report
    }

    fn step_accumulated(&self, pool: &mut PlanetPool) -> StepReport {
        let snapshot: Vec<Planet> = pool.iter().collect();
        let n = snapshot.len();
        let mut kicks = vec![Vec2::ZERO; n];
        let mut report = StepReport::default();

        for i in 0..n {
            for j in (i + 1)..n {
                match pair_kick(&snapshot[i], &snapshot[j], self.gravity) {
                    Some((dv_i, dv_j)) => {
                        kicks[i] += dv_i;
                        kicks[j] += dv_j;
                    }
                    None => report.degenerate.push((i, j)),
                }
            }
        }

        for (index, (mut planet, kick)) in snapshot.into_iter().zip(kicks).enumerate() {
            planet.vel += kick;
            planet.pos += planet.vel;
            pool.set(index, &planet);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let contact = pool.with_pair(i, j, |a, b| collision_check(self.collision, a, b));
                report.pairs += 1;
                if let Some(result) = contact.flatten() {
                    report.contacts.push(Contact {
                        pair: (i, j),
                        result,
                    });
                }
            }
        }
        report
    }
}

fn record(
    report: &mut StepReport,
    pair: (usize, usize),
    moved: bool,
    contact: Option<CollisionResult>,
) {
    report.pairs += 1;
    if !moved {
        report.degenerate.push(pair);
    }
    if let Some(result) = contact {
        report.contacts.push(Contact { pair, result });
    }
}
