//! The nest: delivery zone and continuous home-scent emitter.

use ant_core::Vec2;
use ant_field::ScentField;

/// The colony's home anchor.
///
/// Every tick the nest deposits `source_rate × dt` of home scent at its
/// position, giving returning ants a persistent gradient to climb even after
/// their own trails evaporate.  Its `radius` defines the delivery zone used
/// by the proximity pass.
#[derive(Clone, Debug)]
pub struct Nest {
    pub position: Vec2,
    pub radius: f32,
    /// Home-scent units deposited per second.
    pub source_rate: f32,
}

impl Nest {
    pub fn new(position: Vec2, radius: f32, source_rate: f32) -> Self {
        Self { position, radius, source_rate }
    }

    /// Deposit this tick's home scent.  No-op for `dt <= 0`.
    pub fn emit(&self, dt: f32, home: &mut ScentField) {
        if dt <= 0.0 {
            return;
        }
        home.deposit(self.position, self.source_rate * dt);
    }

    /// `true` if `p` is inside the delivery zone.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.distance(self.position) <= self.radius
    }
}

impl Default for Nest {
    fn default() -> Self {
        Self {
            position:    Vec2::ZERO,
            radius:      1.5,
            source_rate: 10.0,
        }
    }
}
