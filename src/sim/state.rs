//! Simulation session state
//!
//! Everything the driver holds between frames: the pool, the stepper, the
//! pause flag and the tick counter.

use glam::Vec2;

use super::physics::Integrator;
use super::planet::{DrawItem, Planet, PlanetPool, total_footprint_bytes};
use crate::error::SimResult;
use crate::settings::{SimConfig, SpawnTemplate};

/// Diagnostics shown alongside the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimStats {
    pub planets: usize,
    pub max_planets: usize,
    pub arena_used: usize,
    pub arena_capacity: usize,
    /// Pool + arena + records, as reported at startup
    pub footprint_bytes: usize,
    pub time_ticks: u64,
}

/// A running simulation
#[derive(Debug)]
pub struct Simulation {
    pub pool: PlanetPool,
    pub integrator: Integrator,
    pub paused: bool,
    /// Ticks actually stepped (paused frames do not count)
    pub time_ticks: u64,
    spawn: SpawnTemplate,
}

impl Simulation {
    /// Build the pool and insert the configured bodies in order
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;

        let mut pool = PlanetPool::new(config.max_planets)?;
        log::info!(
            "Planet pool ready for {} planets. Total memory allocation: {} bytes",
            config.max_planets,
            total_footprint_bytes(config.max_planets)
        );

        for body in &config.bodies {
            pool.insert(&body.to_planet())?;
        }

        Ok(Self {
            pool,
            integrator: config.integrator(),
            paused: false,
            time_ticks: 0,
            spawn: config.spawn.clone(),
        })
    }

    pub fn insert(&mut self, planet: &Planet) -> SimResult<usize> {
        let index = self.pool.insert(planet)?;
        log::debug!("Inserted {} at slot {}", planet.name(), index);
        Ok(index)
    }

    /// Drop a planet from the spawn template at `pos`
    pub fn spawn(&mut self, pos: Vec2) -> SimResult<usize> {
        let planet = self.spawn.at(pos);
        self.insert(&planet)
    }

    pub fn planets(&self) -> impl Iterator<Item = Planet> + '_ {
        self.pool.iter()
    }

    pub fn draw_list(&self) -> Vec<DrawItem> {
        self.pool.draw_list()
    }

    pub fn stats(&self) -> SimStats {
        SimStats {
            planets: self.pool.len(),
            max_planets: self.pool.capacity(),
            arena_used: self.pool.arena().used(),
            arena_capacity: self.pool.arena().capacity(),
            footprint_bytes: total_footprint_bytes(self.pool.capacity()),
            time_ticks: self.time_ticks,
        }
    }

    /// Release the pool and every planet in it
    pub fn teardown(self) {
        self.pool.teardown();
        log::info!("Planet pool freed");
    }
}
