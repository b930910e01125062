//! Bounded memory for the simulation
//!
//! All record storage is reserved once when a pool is created:
//! - One contiguous arena per pool, sized for the pool's capacity
//! - Records are bump-allocated and never freed individually
//! - The whole block is released at once when the pool is torn down

mod arena;
mod pool;

pub use arena::{Arena, ArenaRegion};
pub use pool::Pool;
