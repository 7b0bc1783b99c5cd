//! forage — end-to-end demo of the rust_ants foraging simulation.
//!
//! 24 ants on a 45 m plane with a nest in one corner and food scattered
//! around the opposite quadrant.  Two simulated minutes at 60 Hz is enough
//! for the first return trails to form; watch `tick_summaries.csv` for the
//! carrying count and food-scent mass climbing.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ant_agent::AgentConfig;
use ant_colony::{Nest, SpawnerConfig};
use ant_core::{SimConfig, Vec2};
use ant_field::FieldConfig;
use ant_nav::{Navigator, Obstacle, PlanarNavigator};
use ant_output::{CsvWriter, SimOutputObserver};
use ant_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const ANT_COUNT:               usize = 24;
const SEED:                    u64   = 42;
const TICK_DURATION_SECS:      f32   = 0.016; // ~60 Hz
const SIM_SECONDS:             u64   = 120;
const SNAPSHOT_INTERVAL_TICKS: u64   = 25;    // one row per 0.4 s

const WORLD_SIZE:  f32 = 45.0;
const NEST_POS:    Vec2 = Vec2 { x: -12.0, y: -12.0 };
const FOOD_CENTER: Vec2 = Vec2 { x: 8.0, y: 8.0 };

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let total_ticks = (SIM_SECONDS as f32 / TICK_DURATION_SECS) as u64;

    println!("=== forage — rust_ants stigmergic foraging ===");
    println!("Ants: {ANT_COUNT}  |  Sim time: {SIM_SECONDS} s  |  Seed: {SEED}");
    println!();

    // 1. Locomotion: a bounded plane with two rocks between nest and food.
    let obstacles = vec![
        Obstacle { center: Vec2::new(-2.0, -2.0), radius: 2.5 },
        Obstacle { center: Vec2::new(4.0, -6.0), radius: 1.5 },
    ];
    let nav = PlanarNavigator::with_obstacles(
        ANT_COUNT,
        WORLD_SIZE * 0.5,
        3.5, // m/s
        0.5, // stopping distance
        obstacles,
    )?;

    // 2. Sim config.
    let config = SimConfig {
        tick_duration_secs:      TICK_DURATION_SECS,
        total_ticks,
        seed:                    SEED,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
    };
    println!(
        "Sim: {} ticks at {} ms, snapshot every {} ticks",
        config.total_ticks,
        TICK_DURATION_SECS * 1000.0,
        SNAPSHOT_INTERVAL_TICKS
    );

    // 3. Build the sim: fields over the whole plane, food scattered in the
    //    quadrant opposite the nest.
    let mut sim = SimBuilder::new(config.clone(), ANT_COUNT, nav)
        .field_config(FieldConfig {
            world_size: WORLD_SIZE,
            ..FieldConfig::default()
        })
        .agent_config(AgentConfig::default())
        .nest(Nest::new(NEST_POS, 1.5, 10.0))
        .spawner(SpawnerConfig {
            center: FOOD_CENTER,
            spawn_radius: 12.0,
            ..SpawnerConfig::default()
        })
        .build()?;
    println!("Food piles: {}", sim.spawner.active_count());
    println!();

    // 4. Output.
    std::fs::create_dir_all("output/forage")?;
    let writer = CsvWriter::new(Path::new("output/forage"))?;
    let mut obs = SimOutputObserver::new(writer, &config);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  home scent mass: {:.2}  |  food scent mass: {:.2}",
        sim.home.total_mass(),
        sim.food.total_mass()
    );
    println!(
        "  carrying: {}/{}  |  live piles: {}  |  failed spawns: {}",
        sim.carrying_count(),
        ANT_COUNT,
        sim.spawner.active_count(),
        sim.spawner.failed_spawns()
    );
    println!();

    // 7. Final ant table.
    println!("{:<6} {:<10} {:<22}", "Ant", "Carrying", "Position");
    println!("{}", "-".repeat(40));
    for forager in &sim.foragers {
        let pos = sim.nav.position(forager.id());
        println!(
            "{:<6} {:<10} {:<22}",
            forager.id().0,
            if forager.is_carrying() { "yes" } else { "no" },
            pos.to_string(),
        );
    }

    Ok(())
}
