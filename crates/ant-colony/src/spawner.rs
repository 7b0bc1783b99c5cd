//! `FoodSpawner` — scatter-spawns piles and respawns them after depletion.

use ant_core::{SimRng, SourceId, Vec2};
use ant_field::ScentField;
use ant_nav::{AreaFilter, Navigator};

use crate::{ColonyError, ColonyResult, FoodSource};

/// Random candidates tried per pile before giving up on a spawn.
const SPAWN_ATTEMPTS: usize = 24;

// ── SpawnerConfig ─────────────────────────────────────────────────────────────

/// Spawner parameters.  Defaults mirror the reference foraging setup.
#[derive(Clone, Debug)]
pub struct SpawnerConfig {
    /// Piles scatter around this point.
    pub center: Vec2,
    /// Scatter radius around `center`, in metres.
    pub spawn_radius: f32,
    /// Piles dropped by [`FoodSpawner::populate`].
    pub initial_count: usize,
    /// Max simultaneous piles.  `populate` and respawns never exceed it.
    pub max_count: usize,
    /// Seconds between a pile's depletion and the replacement spawn attempt.
    pub respawn_delay: f32,
    /// Search radius handed to the navigator when resolving a candidate.
    pub sample_radius: f32,
    /// Wipe food scent around a depleted pile.
    pub clear_on_depleted: bool,
    /// World-space radius of the scent wipe.
    pub clear_radius: f32,
    /// Units of food per pile.
    pub pile_amount: u32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            center:            Vec2::ZERO,
            spawn_radius:      15.0,
            initial_count:     5,
            max_count:         5,
            respawn_delay:     6.0,
            sample_radius:     3.0,
            clear_on_depleted: true,
            clear_radius:      2.0,
            pile_amount:       20,
        }
    }
}

// ── FoodSpawner ───────────────────────────────────────────────────────────────

/// Owns all live food piles plus the respawn countdowns for eaten ones.
pub struct FoodSpawner {
    config:         SpawnerConfig,
    active:         Vec<FoodSource>,
    /// One countdown per depleted pile awaiting replacement.
    respawn_timers: Vec<f32>,
    next_id:        u32,
    failed_spawns:  u32,
}

impl FoodSpawner {
    pub fn new(config: SpawnerConfig) -> ColonyResult<Self> {
        if !config.spawn_radius.is_finite() || config.spawn_radius <= 0.0 {
            return Err(ColonyError::InvalidSpawnRadius(config.spawn_radius));
        }
        if !config.respawn_delay.is_finite() || config.respawn_delay < 0.0 {
            return Err(ColonyError::InvalidRespawnDelay(config.respawn_delay));
        }
        if config.pile_amount == 0 {
            return Err(ColonyError::EmptyPileAmount);
        }
        Ok(Self {
            config,
            active:         Vec::new(),
            respawn_timers: Vec::new(),
            next_id:        0,
            failed_spawns:  0,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// All live piles.
    pub fn sources(&self) -> &[FoodSource] {
        &self.active
    }

    /// Mutable handle to one live pile, or `None` if it was already removed.
    pub fn get_mut(&mut self, id: SourceId) -> Option<&mut FoodSource> {
        self.active.iter_mut().find(|s| s.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Respawn countdowns currently running.
    pub fn pending_respawns(&self) -> usize {
        self.respawn_timers.len()
    }

    /// Spawns abandoned after exhausting all candidate positions.  Non-fatal;
    /// surfaced so drivers can report it.
    pub fn failed_spawns(&self) -> u32 {
        self.failed_spawns
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Drop the initial piles.  Returns how many actually spawned (candidates
    /// that never resolve to walkable ground are skipped, not fatal).
    pub fn populate(&mut self, rng: &mut SimRng, nav: &dyn Navigator) -> usize {
        let target = self.config.initial_count.min(self.config.max_count);
        let mut spawned = 0;
        for _ in 0..target {
            if self.spawn_one(rng, nav).is_some() {
                spawned += 1;
            }
        }
        spawned
    }

    /// Advance respawn countdowns; spawn a replacement for each expired one
    /// while below `max_count`.
    pub fn tick(&mut self, dt: f32, rng: &mut SimRng, nav: &dyn Navigator) {
        if dt <= 0.0 {
            return;
        }
        let mut expired = 0;
        self.respawn_timers.retain_mut(|t| {
            *t -= dt;
            if *t <= 0.0 {
                expired += 1;
                false
            } else {
                true
            }
        });
        for _ in 0..expired {
            if self.active.len() < self.config.max_count {
                self.spawn_one(rng, nav);
            }
        }
    }

    /// React to a pile's depletion: remove it, optionally wipe the food scent
    /// around it, and start a respawn countdown.
    ///
    /// Idempotent — a second call for the same id is a no-op, so double
    /// reports within one tick are harmless.
    pub fn on_depleted(&mut self, id: SourceId, food: &mut ScentField) {
        let Some(idx) = self.active.iter().position(|s| s.id == id) else {
            return;
        };
        let pile = self.active.swap_remove(idx);
        if self.config.clear_on_depleted {
            food.clear_area(pile.position, self.config.clear_radius);
        }
        self.respawn_timers.push(self.config.respawn_delay);
    }

    fn spawn_one(&mut self, rng: &mut SimRng, nav: &dyn Navigator) -> Option<SourceId> {
        for _ in 0..SPAWN_ATTEMPTS {
            let candidate = self.config.center + rng.point_in_disc(self.config.spawn_radius);
            if let Some(pos) =
                nav.resolve_nearest(candidate, self.config.sample_radius, AreaFilter::ALL)
            {
                let id = SourceId(self.next_id);
                self.next_id += 1;
                self.active
                    .push(FoodSource::new(id, pos, self.config.pile_amount));
                return Some(id);
            }
        }
        self.failed_spawns += 1;
        None
    }
}
