//! `ant-core` — foundational types for the `rust_ants` foraging simulation.
//!
//! This crate is a dependency of every other `ant-*` crate.  It intentionally
//! has no `ant-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AntId`, `SourceId`                                   |
//! | [`vec2`]        | `Vec2`, planar distance and rotation                  |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-ant), `SimRng` (global)               |
//! | [`error`]       | `AntError`, `AntResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AntError, AntResult};
pub use ids::{AntId, SourceId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
pub use vec2::Vec2;
