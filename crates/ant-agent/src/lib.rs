//! `ant-agent` — the foraging agent: sensing, steering, and carry state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`config`]  | `AgentConfig` — sensor/timer/deposit parameters           |
//! | [`forager`] | `Forager`, `FieldPair` — the per-ant state machine        |
//! | [`events`]  | `ZoneEvent`, `ZoneKind` — typed proximity events          |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                            |
//!
//! # The decision loop
//!
//! A forager is a two-state machine — Searching (`carrying == false`) and
//! Returning (`carrying == true`) — advanced by an explicit `tick(dt)`:
//!
//! 1. On the sniff cadence, probe the state-selected field at three points
//!    (forward, left, right) and chase the strongest sample if it clears the
//!    threshold and the gradient margin.
//! 2. On the wander cadence or on arrival, re-run the full destination
//!    policy: scent goal, else nest (Returning only), else random wander.
//! 3. While Returning, lay food scent at the current position in proportion
//!    to elapsed time.
//!
//! Pickup and delivery are event-driven: the proximity system dispatches
//! [`ZoneEvent`]s and the owner calls [`Forager::try_pickup`] /
//! [`Forager::deliver`]; the agent never polls for piles itself.

pub mod config;
pub mod error;
pub mod events;
pub mod forager;


pub use config::AgentConfig;
pub use error::{AgentError, AgentResult};
pub use events::{ZoneEvent, ZoneKind};
pub use forager::{FieldPair, Forager};
