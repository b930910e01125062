//! Per-frame simulation tick
//!
//! The driver calls [`tick`] exactly once per rendered frame.

use glam::Vec2;

use super::physics::StepReport;
use super::state::Simulation;
use crate::error::SimError;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pause toggle
    pub pause: bool,
    /// Spawn a planet at this position (click)
    pub spawn_at: Option<Vec2>,
}

/// Apply input, then step the physics unless paused.
///
/// Spawn requests are honored while paused. A request against a full pool
/// is logged and dropped. Returns the step report, or `None` on a paused
/// frame.
pub fn tick(sim: &mut Simulation, input: &TickInput) -> Option<StepReport> {
    if input.pause {
        sim.paused = !sim.paused;
        log::info!("{}", if sim.paused { "Paused" } else { "Resumed" });
    }

    if let Some(pos) = input.spawn_at {
        match sim.spawn(pos) {
            Ok(index) => log::info!("Spawned planet #{} at ({:.1}, {:.1})", index, pos.x, pos.y),
            Err(err @ SimError::PoolFull { .. }) => log::warn!("{err}"),
            Err(err) => log::error!("Failed to spawn planet: {err}"),
        }
    }

    if sim.paused {
        return None;
    }

    sim.time_ticks += 1;
    Some(sim.integrator.step(&mut sim.pool))
}
