//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Unit time step, one step per tick
//! - Stable iteration order (pool slot order)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod planet;
pub mod scenario;
pub mod state;
pub mod tick;

pub use collision::{CollisionPolicy, CollisionResult, circle_overlap, collision_check};
pub use physics::{Contact, IntegrationScheme, Integrator, StepReport, pair_kick, update_pairwise};
pub use planet::{DrawItem, MAX_NAME_LEN, Planet, PlanetPool, total_footprint_bytes};
pub use scenario::ScatterSpawner;
pub use state::{SimStats, Simulation};
pub use tick::{TickInput, tick};
