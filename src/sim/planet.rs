//! Planet records
//!
//! A planet is a plain-old-data record so it can live directly in arena
//! bytes. Names are stored inline in a fixed buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::consts::PLANET_NAME_CAPACITY;
use crate::memory::Pool;

/// Longest name that survives insertion, in bytes
pub const MAX_NAME_LEN: usize = PLANET_NAME_CAPACITY - 1;

/// A point mass
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Planet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Carried with the record; the integrator does not read it
    pub accel: Vec2,
    pub mass: f32,
    /// Drawn (and collided) as the circle radius
    pub diameter: f32,
    name: [u8; PLANET_NAME_CAPACITY],
    name_len: u16,
}

/// The fields a driver needs to draw a planet
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub name: String,
    pub pos: Vec2,
    pub diameter: f32,
}

/// Pool of planets sharing one arena
pub type PlanetPool = Pool<Planet>;

impl Planet {
    /// Build a planet with zero acceleration.
    ///
    /// Names longer than [`MAX_NAME_LEN`] bytes are cut at the last char
    /// boundary that fits.
    pub fn new(name: &str, mass: f32, diameter: f32, pos: Vec2, vel: Vec2) -> Self {
        let mut planet = Self {
            pos,
            vel,
            accel: Vec2::ZERO,
            mass,
            diameter,
            name: [0; PLANET_NAME_CAPACITY],
            name_len: 0,
        };
        planet.set_name(name);
        planet
    }

    pub fn name(&self) -> &str {
        let len = usize::from(self.name_len).min(MAX_NAME_LEN);
        // Only whole chars are ever copied in
        std::str::from_utf8(&self.name[..len]).unwrap_or_default()
    }

    pub fn set_name(&mut self, name: &str) {
        let mut len = name.len().min(MAX_NAME_LEN);
        while !name.is_char_boundary(len) {
            len -= 1;
        }
        self.name = [0; PLANET_NAME_CAPACITY];
        self.name[..len].copy_from_slice(&name.as_bytes()[..len]);
        self.name_len = len as u16;
    }

    /// Momentum vector (mass * velocity)
    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }

    pub fn draw_item(&self) -> DrawItem {
        DrawItem {
            name: self.name().to_owned(),
            pos: self.pos,
            diameter: self.diameter,
        }
    }

    /// Whether every vector field is finite
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.accel.is_finite()
    }
}

impl std::fmt::Debug for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planet")
            .field("name", &self.name())
            .field("mass", &self.mass)
            .field("diameter", &self.diameter)
            .field("pos", &self.pos)
            .field("vel", &self.vel)
            .field("accel", &self.accel)
            .finish()
    }
}

impl PlanetPool {
    /// Read-only projection of every live planet, in insertion order
    pub fn draw_list(&self) -> Vec<DrawItem> {
        self.iter().map(|p| p.draw_item()).collect()
    }
}

/// Bytes accounted for by a planet pool of `max_planets` capacity
pub const fn total_footprint_bytes(max_planets: usize) -> usize {
    PlanetPool::footprint_bytes(max_planets)
}
