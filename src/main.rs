//! Planet Pool entry point
//!
//! Headless driver: loads settings, seeds the scene, runs a fixed number of
//! ticks and logs where everything ended up. Spawn requests stand in for
//! mouse clicks.
//!
//! Usage: `planet-pool [config.json] [--collision ignore|detect|resolve]`

use std::process::ExitCode;

use planet_pool::sim::{CollisionPolicy, ScatterSpawner, Simulation, TickInput, tick};
use planet_pool::{SimConfig, SimError};

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<String>,
    collision: Option<CollisionPolicy>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, SimError> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        if arg == "--collision" {
            let value = args
                .next()
                .ok_or_else(|| SimError::Config("--collision needs a policy".into()))?;
            let policy = CollisionPolicy::from_str(&value)
                .ok_or_else(|| SimError::Config(format!("unknown collision policy '{value}'")))?;
            parsed.collision = Some(policy);
        } else {
            parsed.config = Some(arg);
        }
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Planet Pool (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SimError> {
    let args = parse_args(std::env::args().skip(1))?;
    let mut config = match args.config {
        Some(path) => SimConfig::load(path)?,
        None => {
            log::info!("Using default settings");
            SimConfig::default()
        }
    };
    if let Some(policy) = args.collision {
        config.collision = policy;
    }
    log::info!("Collision policy: {}", config.collision.as_str());

    let mut sim = Simulation::new(&config)?;
    let mut spawner = ScatterSpawner::new(config.seed, config.screen_width, config.screen_height);

    let stats = sim.stats();
    log::info!("Maximum allowed planets: {}", stats.max_planets);
    log::info!("Total allocated pool memory: {} bytes", stats.footprint_bytes);

    let mut degenerate = 0usize;
    let mut contacts = 0usize;
    for frame in 1..=config.headless_ticks {
        let input = TickInput {
            spawn_at: (config.spawn_every > 0 && frame % config.spawn_every == 0)
                .then(|| spawner.next_position()),
            ..Default::default()
        };

        if let Some(report) = tick(&mut sim, &input) {
            degenerate += report.degenerate.len();
            contacts += report.contacts.len();
            for contact in &report.contacts {
                let (i, j) = contact.pair;
                log::debug!(
                    "Frame {frame}: contact {i}-{j} at ({:.2}, {:.2})",
                    contact.result.point.x,
                    contact.result.point.y
                );
            }
        }
    }

    let stats = sim.stats();
    log::info!(
        "Ran {} ticks: {} planets, {} of {} arena bytes used, {} skipped pairs, {} contacts",
        stats.time_ticks,
        stats.planets,
        stats.arena_used,
        stats.arena_capacity,
        degenerate,
        contacts
    );
    for item in sim.draw_list() {
        log::info!(
            "{:<29} pos=({:>10.2}, {:>10.2}) diameter={}",
            item.name,
            item.pos.x,
            item.pos.y,
            item.diameter
        );
    }

    sim.teardown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args_collision_flag() {
        let parsed = parse_args(args(&["scene.json", "--collision", "bounce"])).unwrap();
        assert_eq!(parsed.config.as_deref(), Some("scene.json"));
        assert_eq!(parsed.collision, Some(CollisionPolicy::Resolve));
        assert_eq!(parsed.collision.unwrap().as_str(), "resolve");

        assert_eq!(parse_args(args(&[])).unwrap(), Args::default());
    }

    #[test]
    fn test_parse_args_rejects_bad_policy() {
        assert!(matches!(
            parse_args(args(&["--collision", "explode"])),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            parse_args(args(&["--collision"])),
            Err(SimError::Config(_))
        ));
    }
}
