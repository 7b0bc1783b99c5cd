//! Typed proximity events consumed by the agent's transition logic.
//!
//! The agent never scans for piles or the nest itself: an external proximity
//! pass detects contact and dispatches one of these events, and the owner
//! routes it to [`Forager::try_pickup`][crate::Forager::try_pickup] or
//! [`Forager::deliver`][crate::Forager::deliver].

use ant_core::{AntId, SourceId};

/// What kind of zone an ant entered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoneKind {
    /// Contact with a live food pile.
    FoodSource(SourceId),
    /// Contact with the nest's delivery zone.
    Nest,
}

/// "Ant entered a zone" — carries the zone's identity so the handler needs
/// no further lookups.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ZoneEvent {
    pub ant: AntId,
    pub kind: ZoneKind,
}
