//! `ant-nav` — the navigation seam between agents and the world.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`navigator`] | `Navigator` trait, `AreaFilter`                          |
//! | [`planar`]    | `PlanarNavigator`, `Obstacle` — open-plane default mover |
//! | [`error`]     | `NavError`, `NavResult<T>`                               |
//!
//! # Design notes
//!
//! Agents never compute paths or move themselves: they hand destination
//! points to a [`Navigator`] and read their own pose back from it.  The
//! navigator is the sole owner and mover of body positions.  Swapping in a
//! real pathfinding backend (grid A*, navmesh) is a matter of implementing
//! the trait; the agent code never changes.

pub mod error;
pub mod navigator;
pub mod planar;

#[cfg(test)]
mod tests;

pub use error::{NavError, NavResult};
pub use navigator::{AreaFilter, Navigator};
pub use planar::{Obstacle, PlanarNavigator};
