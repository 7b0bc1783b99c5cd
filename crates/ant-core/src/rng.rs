//! Deterministic per-ant and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each ant gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (ant_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ant IDs uniformly across the seed space.
//! This means:
//!
//! - Ants never share RNG state (no contention, no ordering dependency).
//! - Adding or removing ants at the end of the list does not disturb the
//!   seeds of existing ants — runs are reproducible even as colonies grow.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AntId, Vec2};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-ant deterministic RNG.
///
/// Create one per ant at simulation init; store in a parallel `Vec<AgentRng>`
/// alongside the forager list.  The type is `!Sync` to prevent accidental
/// sharing across threads.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an ant ID.
    pub fn new(global_seed: u64, ant: AntId) -> Self {
        let seed = global_seed ^ (ant.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A point uniformly distributed over the disc of `radius` around the
    /// origin.
    ///
    /// Uses the sqrt-radius transform so the draw count per call is constant
    /// (no rejection loop), keeping RNG streams aligned across runs.
    pub fn point_in_disc(&mut self, radius: f32) -> Vec2 {
        let r = radius * self.0.gen_range(0.0f32..1.0).sqrt();
        let theta = self.0.gen_range(0.0f32..std::f32::consts::TAU);
        Vec2::new(r * theta.cos(), r * theta.sin())
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (food scatter, exogenous
/// events, etc.).
///
/// Used only in single-threaded contexts.  If you need parallel randomness,
/// give each worker its own `SimRng` seeded from this one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding sub-system RNGs deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A point uniformly distributed over the disc of `radius` around the
    /// origin.  Same transform as [`AgentRng::point_in_disc`].
    pub fn point_in_disc(&mut self, radius: f32) -> Vec2 {
        let r = radius * self.0.gen_range(0.0f32..1.0).sqrt();
        let theta = self.0.gen_range(0.0f32..std::f32::consts::TAU);
        Vec2::new(r * theta.cos(), r * theta.sin())
    }
}
