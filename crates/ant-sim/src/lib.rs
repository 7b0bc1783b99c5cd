//! `ant-sim` — tick loop orchestrator for the rust_ants simulation.
//!
//! # Six-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Locomotion — the navigator integrates every body toward its
//!                  destination.
//!   ② Proximity  — contacts become typed ZoneEvents, applied in ascending
//!                  AntId order: pickups (depletion routed to the spawner,
//!                  which wipes scent and schedules a respawn) and
//!                  deliveries.
//!   ③ Nest       — the nest deposits its home scent.
//!   ④ Agents     — every forager ticks (sniff, wander, trail-lay) in
//!                  ascending AntId order.
//!   ⑤ Spawner    — respawn countdowns advance; replacements spawn.
//!   ⑥ Fields     — home and food advance their diffusion/evaporation step.
//! ```
//!
//! All deposits (nest and agents) land before phase ⑥, so a field's step
//! never interleaves with writes to it within a tick, and every reader in
//! phases ①–⑤ observes one consistent buffer.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ant_core::SimConfig;
//! use ant_nav::PlanarNavigator;
//! use ant_sim::{NoopObserver, SimBuilder};
//!
//! let nav = PlanarNavigator::open(24, 22.5, 3.5, 0.5)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), 24, nav).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, SimSnapshot};
pub use sim::Sim;
