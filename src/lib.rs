//! Planet Pool - a pairwise gravitational N-body simulator
//!
//! Core modules:
//! - `memory`: Bump arena and the fixed-capacity pool carved out of it
//! - `sim`: Planets, pairwise gravity, collision policies and the tick loop
//! - `settings`: Data-driven simulation configuration
//! - `error`: Error values shared by every layer

pub mod error;
pub mod memory;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use memory::{Arena, ArenaRegion, Pool};
pub use settings::SimConfig;
pub use sim::{
    CollisionPolicy, DrawItem, IntegrationScheme, Integrator, Planet, PlanetPool, Simulation,
    StepReport, TickInput, tick, total_footprint_bytes,
};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Gravitational constant used by the integrator
    pub const GRAVITY: f32 = 10.0;
    /// Capacity ceiling of the planet pool
    pub const MAX_PLANETS: usize = 100;

    /// Logical screen dimensions (driver space)
    pub const SCREEN_WIDTH: u32 = 1440;
    pub const SCREEN_HEIGHT: u32 = 900;

    /// Bytes reserved for a planet name, including the terminator slot
    pub const PLANET_NAME_CAPACITY: usize = 30;
}

/// Centre of the logical screen
#[inline]
pub fn screen_center(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}
