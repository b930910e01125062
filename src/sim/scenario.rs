//! Built-in scenes and spawn sources

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::{BodyConfig, SpawnTemplate};

/// Offset of Earth and Mars from the Sun, along the diagonal
const ORBIT_OFFSET: f32 = 150.0;

/// Sun at `center`, Earth and Mars on opposite diagonals.
///
/// Listed in insertion order: Earth, Sun, Mars.
pub fn solar_system(center: Vec2) -> Vec<BodyConfig> {
    let offset = Vec2::splat(ORBIT_OFFSET);
    vec![
        BodyConfig {
            name: "Earth".into(),
            mass: 20.0,
            diameter: 30.0,
            position: center + offset,
            velocity: Vec2::new(-2.5, 3.5),
        },
        BodyConfig {
            name: "Sun".into(),
            mass: 500.0,
            diameter: 75.0,
            position: center,
            velocity: Vec2::ZERO,
        },
        BodyConfig {
            name: "Mars".into(),
            mass: 10.0,
            diameter: 25.0,
            position: center - offset,
            velocity: Vec2::new(-1.5, 2.5),
        },
    ]
}

/// The planet dropped wherever the user clicks
pub fn default_spawn() -> SpawnTemplate {
    SpawnTemplate {
        name: "Default".into(),
        mass: 20.0,
        diameter: 30.0,
        velocity: Vec2::new(-0.5, 1.5),
    }
}

/// Deterministic stand-in for mouse clicks: uniform positions on screen
#[derive(Debug, Clone)]
pub struct ScatterSpawner {
    rng: Pcg32,
    size: Vec2,
}

impl ScatterSpawner {
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            size: Vec2::new(width.max(1) as f32, height.max(1) as f32),
        }
    }

    pub fn next_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(0.0..self.size.x),
            self.rng.random_range(0.0..self.size.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_layout() {
        let center = Vec2::new(720.0, 450.0);
        let bodies = solar_system(center);
        let names: Vec<&str> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Earth", "Sun", "Mars"]);
        assert_eq!(bodies[0].position, Vec2::new(870.0, 600.0));
        assert_eq!(bodies[1].position, center);
        assert_eq!(bodies[2].position, Vec2::new(570.0, 300.0));
    }

    #[test]
    fn test_default_spawn() {
        let planet = default_spawn().at(Vec2::new(3.0, 4.0));
        assert_eq!(planet.name(), "Default");
        assert_eq!(planet.mass, 20.0);
        assert_eq!(planet.vel, Vec2::new(-0.5, 1.5));
        assert_eq!(planet.pos, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_scatter_is_seeded_and_on_screen() {
        let mut a = ScatterSpawner::new(7, 1440, 900);
        let mut b = ScatterSpawner::new(7, 1440, 900);
        for _ in 0..100 {
            let p = a.next_position();
            assert_eq!(p, b.next_position());
            assert!((0.0..1440.0).contains(&p.x));
            assert!((0.0..900.0).contains(&p.y));
        }
    }
}
