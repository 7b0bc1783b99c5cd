//! Fluent builder for constructing a [`Sim`].

use ant_agent::{AgentConfig, Forager};
use ant_colony::{FoodSpawner, Nest, SpawnerConfig};
use ant_core::{AgentRng, AntId, SimConfig, SimRng};
use ant_field::{FieldConfig, ScentField};
use ant_nav::Navigator;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<N>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration, …
/// - `ant_count` — colony size; must match the navigator's body count
/// - `N: Navigator` — the locomotion backend
///   (e.g. [`ant_nav::PlanarNavigator`])
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                   |
/// |--------------------|---------------------------|
/// | `.field_config(c)` | `FieldConfig::default()`  |
/// | `.agent_config(c)` | `AgentConfig::default()`  |
/// | `.spawner(c)`      | `SpawnerConfig::default()`|
/// | `.nest(n)`         | `Nest::default()`         |
/// | `.pickup_radius(r)`| 1.0 m                     |
///
/// # Example
///
/// ```rust,ignore
/// let nav = PlanarNavigator::open(24, 22.5, 3.5, 0.5)?;
/// let mut sim = SimBuilder::new(SimConfig::default(), 24, nav)
///     .nest(Nest::new(Vec2::new(-12.0, -12.0), 1.5, 10.0))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<N: Navigator> {
    config:         SimConfig,
    ant_count:      usize,
    nav:            N,
    field_config:   FieldConfig,
    agent_config:   AgentConfig,
    spawner_config: SpawnerConfig,
    nest:           Nest,
    pickup_radius:  f32,
}

impl<N: Navigator> SimBuilder<N> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, ant_count: usize, nav: N) -> Self {
        Self {
            config,
            ant_count,
            nav,
            field_config:   FieldConfig::default(),
            agent_config:   AgentConfig::default(),
            spawner_config: SpawnerConfig::default(),
            nest:           Nest::default(),
            pickup_radius:  1.0,
        }
    }

    /// Grid and dynamics parameters shared by both scent fields.
    pub fn field_config(mut self, config: FieldConfig) -> Self {
        self.field_config = config;
        self
    }

    /// Sensor, timer, and deposit parameters shared by every forager.
    pub fn agent_config(mut self, config: AgentConfig) -> Self {
        self.agent_config = config;
        self
    }

    /// Food scatter and respawn parameters.
    pub fn spawner(mut self, config: SpawnerConfig) -> Self {
        self.spawner_config = config;
        self
    }

    /// Nest position, delivery radius, and home-scent rate.
    pub fn nest(mut self, nest: Nest) -> Self {
        self.nest = nest;
        self
    }

    /// Contact distance for pile pickups.
    pub fn pickup_radius(mut self, radius: f32) -> Self {
        self.pickup_radius = radius;
        self
    }

    /// Validate inputs, build fields and foragers, scatter the initial food,
    /// and return a ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<N>> {
        if self.nav.body_count() != self.ant_count {
            return Err(SimError::AgentCountMismatch {
                expected: self.ant_count,
                got:      self.nav.body_count(),
                what:     "navigator bodies",
            });
        }
        self.agent_config.validate()?;
        if !self.pickup_radius.is_finite() || self.pickup_radius <= 0.0 {
            return Err(SimError::Config(format!(
                "pickup_radius must be finite and > 0, got {}",
                self.pickup_radius
            )));
        }

        let home = ScentField::new(&self.field_config)?;
        let food = ScentField::new(&self.field_config)?;

        // ── Foragers start at the nest, timers primed ─────────────────────
        let foragers: Vec<Forager> = (0..self.ant_count as u32)
            .map(|i| Forager::new(AntId(i), &self.agent_config))
            .collect();
        let rngs: Vec<AgentRng> = (0..self.ant_count as u32)
            .map(|i| AgentRng::new(self.config.seed, AntId(i)))
            .collect();
        for forager in &foragers {
            self.nav.place(forager.id(), self.nest.position);
        }

        // ── Scatter the initial food ──────────────────────────────────────
        let mut spawn_rng = SimRng::new(self.config.seed).child(1);
        let mut spawner = FoodSpawner::new(self.spawner_config)?;
        spawner.populate(&mut spawn_rng, &self.nav);

        Ok(Sim {
            clock:         self.config.make_clock(),
            config:        self.config,
            home,
            food,
            foragers,
            rngs,
            nav:           self.nav,
            spawner,
            nest:          self.nest,
            agent_config:  self.agent_config,
            pickup_radius: self.pickup_radius,
            spawn_rng,
        })
    }
}
