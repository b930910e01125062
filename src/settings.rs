//! Simulation configuration
//!
//! Loaded once at startup from an optional JSON file. Every field falls back
//! to the built-in defaults, so a partial file only overrides what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::sim::{CollisionPolicy, IntegrationScheme, Integrator, Planet, scenario};

/// Initial state of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f32,
    pub diameter: f32,
    pub position: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
}

impl BodyConfig {
    pub fn to_planet(&self) -> Planet {
        Planet::new(
            &self.name,
            self.mass,
            self.diameter,
            self.position,
            self.velocity,
        )
    }
}

/// Template for bodies spawned at runtime; the position comes from the
/// request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTemplate {
    pub name: String,
    pub mass: f32,
    pub diameter: f32,
    pub velocity: Vec2,
}

impl SpawnTemplate {
    pub fn at(&self, position: Vec2) -> Planet {
        Planet::new(&self.name, self.mass, self.diameter, position, self.velocity)
    }
}

impl Default for SpawnTemplate {
    fn default() -> Self {
        scenario::default_spawn()
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Pool & physics ===
    /// Capacity ceiling of the planet pool
    pub max_planets: usize,
    /// Gravitational constant
    pub gravity: f32,
    /// Collision hook behavior
    pub collision: CollisionPolicy,
    /// Pair loop integration scheme
    pub scheme: IntegrationScheme,

    // === Scene ===
    pub screen_width: u32,
    pub screen_height: u32,
    /// Bodies inserted at startup, in order
    pub bodies: Vec<BodyConfig>,
    /// Planet created by spawn requests
    pub spawn: SpawnTemplate,

    // === Headless driver ===
    /// Seed for spawn positions
    pub seed: u64,
    /// Ticks to run before exiting
    pub headless_ticks: u64,
    /// Spawn a body every N ticks (0 disables)
    pub spawn_every: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        let center = crate::screen_center(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            max_planets: MAX_PLANETS,
            gravity: GRAVITY,
            collision: CollisionPolicy::Ignore,
            scheme: IntegrationScheme::Sequential,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bodies: scenario::solar_system(center),
            spawn: SpawnTemplate::default(),

            seed: 0x5EED,
            headless_ticks: 600,
            spawn_every: 0,
        }
    }
}

impl SimConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::Config(e.to_string()))
    }

    /// Reject settings the integrator cannot work with
    pub fn validate(&self) -> SimResult<()> {
        if self.max_planets == 0 {
            return Err(SimError::Config("max_planets must be at least 1".into()));
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(SimError::Config(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if self.bodies.len() > self.max_planets {
            return Err(SimError::Config(format!(
                "{} initial bodies exceed max_planets ({})",
                self.bodies.len(),
                self.max_planets
            )));
        }

        let named = self
            .bodies
            .iter()
            .map(|b| (b.name.as_str(), b.mass, b.diameter))
            .chain(std::iter::once((
                self.spawn.name.as_str(),
                self.spawn.mass,
                self.spawn.diameter,
            )));
        for (name, mass, diameter) in named {
            if !(mass.is_finite() && mass > 0.0) {
                return Err(SimError::Config(format!("{name}: mass must be positive")));
            }
            if !(diameter.is_finite() && diameter > 0.0) {
                return Err(SimError::Config(format!(
                    "{name}: diameter must be positive"
                )));
            }
        }
        Ok(())
    }

    pub fn integrator(&self) -> Integrator {
        Integrator::new(self.gravity)
            .with_collision(self.collision)
            .with_scheme(self.scheme)
    }
}
