//! The `Sim` struct and its tick loop.

use ant_agent::{AgentConfig, FieldPair, Forager, ZoneEvent, ZoneKind};
use ant_colony::{FoodSpawner, Nest, TakeOutcome};
use ant_core::{AgentRng, SimClock, SimConfig, SimRng};
use ant_field::ScentField;
use ant_nav::Navigator;

use crate::{SimObserver, SimResult, SimSnapshot};

/// The main simulation runner.
///
/// `Sim<N>` owns both scent fields, all foragers and their RNGs, the
/// navigator, the spawner, and the nest, and drives the six-phase tick loop
/// documented at the [crate root](crate).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<N: Navigator> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Home-scent field: written by the nest, sensed by returning ants.
    pub home: ScentField,

    /// Food-scent field: written by carrying ants, sensed by searching ants,
    /// wiped around depleted piles.
    pub food: ScentField,

    /// Every forager, indexed by `AntId`.
    pub foragers: Vec<Forager>,

    /// Per-ant deterministic RNGs, parallel to `foragers`.
    pub rngs: Vec<AgentRng>,

    /// The locomotion backend.  Sole owner of body poses.
    pub nav: N,

    /// Food piles and respawn countdowns.
    pub spawner: FoodSpawner,

    /// Delivery zone and home-scent emitter.
    pub nest: Nest,

    /// Shared agent tuning parameters.
    pub agent_config: AgentConfig,

    /// Contact distance for pile pickups, in metres.
    pub pickup_radius: f32,

    /// RNG driving pile scatter, derived from the master seed.
    pub(crate) spawn_rng: SimRng,
}

impl<N: Navigator> Sim<N> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            let events = self.process_tick(self.config.tick_duration_secs);
            observer.on_tick_end(now, events);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.snapshot());
            }

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let events = self.process_tick(self.config.tick_duration_secs);
            observer.on_tick_end(now, events);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.snapshot());
            }
            self.clock.advance();
        }
        Ok(())
    }

    /// Foragers currently in the Returning state.
    pub fn carrying_count(&self) -> usize {
        self.foragers.iter().filter(|f| f.is_carrying()).count()
    }

    /// Build the read-only view handed to snapshot hooks.
    pub fn snapshot(&self) -> SimSnapshot<'_> {
        SimSnapshot {
            foragers:       &self.foragers,
            nav:            &self.nav,
            home:           &self.home,
            food:           &self.food,
            active_sources: self.spawner.active_count(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// One full tick.  Returns the number of zone events dispatched.
    fn process_tick(&mut self, dt: f32) -> usize {
        // ── Phase 1: locomotion ───────────────────────────────────────────
        self.nav.advance(dt);

        // ── Phase 2: proximity events ─────────────────────────────────────
        //
        // Events are collected against a single consistent world state, then
        // applied in ascending AntId order so two ants racing for the last
        // unit of a pile resolve deterministically.
        let events = self.collect_zone_events();
        let event_count = events.len();
        for event in events {
            self.apply_zone_event(event);
        }

        // ── Phase 3: nest scent ───────────────────────────────────────────
        self.nest.emit(dt, &mut self.home);

        // ── Phase 4: agents ───────────────────────────────────────────────
        let nest_pos = self.nest.position;
        let Sim { foragers, rngs, nav, home, food, agent_config, .. } = self;
        for (forager, rng) in foragers.iter_mut().zip(rngs.iter_mut()) {
            forager.tick(
                dt,
                agent_config,
                FieldPair { home: &*home, food: &mut *food },
                &mut *nav,
                rng,
                nest_pos,
            );
        }

        // ── Phase 5: spawner ──────────────────────────────────────────────
        self.spawner.tick(dt, &mut self.spawn_rng, &self.nav);

        // ── Phase 6: fields advance ───────────────────────────────────────
        //
        // Every deposit for this tick has landed by now; the double-buffered
        // step is the last writer.
        self.home.step(dt);
        self.food.step(dt);

        event_count
    }

    /// Scan for ants touching a pile (Searching) or the nest (Returning).
    ///
    /// O(ants × piles) — pile counts are small, so a spatial index would buy
    /// nothing here.
    fn collect_zone_events(&self) -> Vec<ZoneEvent> {
        let mut events = Vec::new();
        for forager in &self.foragers {
            let pos = self.nav.position(forager.id());
            if forager.is_carrying() {
                if self.nest.contains(pos) {
                    events.push(ZoneEvent { ant: forager.id(), kind: ZoneKind::Nest });
                }
            } else if let Some(pile) = self
                .spawner
                .sources()
                .iter()
                .find(|s| s.position.distance(pos) <= self.pickup_radius)
            {
                events.push(ZoneEvent {
                    ant:  forager.id(),
                    kind: ZoneKind::FoodSource(pile.id),
                });
            }
        }
        events
    }

    fn apply_zone_event(&mut self, event: ZoneEvent) {
        let forager = &mut self.foragers[event.ant.index()];
        match event.kind {
            ZoneKind::FoodSource(id) => {
                // The pile may already be gone if an earlier event this tick
                // depleted it; the pickup is simply refused by absence.
                let Some(pile) = self.spawner.get_mut(id) else {
                    return;
                };
                if forager.try_pickup(pile) == TakeOutcome::Depleted {
                    self.spawner.on_depleted(id, &mut self.food);
                }
            }
            ZoneKind::Nest => {
                forager.deliver();
            }
        }
    }
}
