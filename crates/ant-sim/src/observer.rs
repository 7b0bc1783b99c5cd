//! Simulation observer trait for progress reporting and data collection.

use ant_agent::Forager;
use ant_core::Tick;
use ant_field::ScentField;
use ant_nav::Navigator;

/// Read-only view of the simulation handed to snapshot hooks.
///
/// Everything here borrows the live simulation state for the duration of the
/// callback; output writers record what they need and return.
pub struct SimSnapshot<'a> {
    /// Every forager, indexed by `AntId`.
    pub foragers: &'a [Forager],
    /// Pose source for the foragers.
    pub nav: &'a dyn Navigator,
    /// The home-scent field.
    pub home: &'a ScentField,
    /// The food-scent field.
    pub food: &'a ScentField,
    /// Live food piles right now.
    pub active_sources: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, events: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {events} zone events");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `events` is the number of zone events (pickups attempted, deliveries)
    /// dispatched this tick.
    fn on_tick_end(&mut self, _tick: Tick, _events: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks).
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &SimSnapshot<'_>) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
