//! `ant-colony` — world content: food piles, the scatter spawner, and the
//! nest.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`source`]  | `FoodSource`, `ResourceSource` trait, `TakeOutcome`       |
//! | [`spawner`] | `FoodSpawner`, `SpawnerConfig` — scatter + respawn        |
//! | [`nest`]    | `Nest` — home-scent emitter and delivery zone             |
//! | [`error`]   | `ColonyError`, `ColonyResult<T>`                          |
//!
//! # Depletion flow
//!
//! `FoodSource::take` reports depletion synchronously in its return value
//! (`TakeOutcome::Depleted`); there is no callback registry.  The caller
//! routes that outcome to [`FoodSpawner::on_depleted`], which removes the
//! pile, wipes nearby food scent, and starts a respawn countdown — all
//! within the same tick.

pub mod error;
pub mod nest;
pub mod source;
pub mod spawner;


pub use error::{ColonyError, ColonyResult};
pub use nest::Nest;
pub use source::{FoodSource, ResourceSource, TakeOutcome};
pub use spawner::{FoodSpawner, SpawnerConfig};
