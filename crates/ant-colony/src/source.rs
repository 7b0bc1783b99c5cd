//! Finite food piles and the resource-taking seam.

use ant_core::{SourceId, Vec2};

// ── TakeOutcome ───────────────────────────────────────────────────────────────

/// Result of one [`ResourceSource::take`] call.
///
/// `Depleted` means the units were taken AND this call drained the source —
/// the one-shot depletion signal the spawner reacts to.  Later calls on an
/// empty source return `Refused`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TakeOutcome {
    /// Nothing taken; the source was already empty.
    Refused,
    /// Units taken; the source still holds more.
    Taken,
    /// Units taken; this call emptied the source.
    Depleted,
}

impl TakeOutcome {
    /// `true` if any units changed hands.
    #[inline]
    pub fn took(self) -> bool {
        !matches!(self, TakeOutcome::Refused)
    }
}

// ── ResourceSource ────────────────────────────────────────────────────────────

/// A depletable supply agents can draw from.
///
/// Kept as a trait so agent code never depends on the concrete pile type;
/// tests substitute bottomless or pre-drained stand-ins.
pub trait ResourceSource {
    /// Attempt to take `n` units.  Taking more than remains succeeds and
    /// drains the source.
    fn take(&mut self, n: u32) -> TakeOutcome;

    /// Units left.
    fn remaining(&self) -> u32;

    fn is_depleted(&self) -> bool {
        self.remaining() == 0
    }
}

// ── FoodSource ────────────────────────────────────────────────────────────────

/// One pile of food at a fixed position.
#[derive(Clone, Debug)]
pub struct FoodSource {
    pub id: SourceId,
    pub position: Vec2,
    amount: u32,
}

impl FoodSource {
    pub fn new(id: SourceId, position: Vec2, amount: u32) -> Self {
        Self { id, position, amount }
    }
}

impl ResourceSource for FoodSource {
    fn take(&mut self, n: u32) -> TakeOutcome {
        if self.amount == 0 {
            return TakeOutcome::Refused;
        }
        self.amount = self.amount.saturating_sub(n);
        if self.amount == 0 {
            TakeOutcome::Depleted
        } else {
            TakeOutcome::Taken
        }
    }

    fn remaining(&self) -> u32 {
        self.amount
    }
}
