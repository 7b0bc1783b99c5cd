//! `ant-field` — the scent-field grid and its diffusion/evaporation step.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`field`]  | `ScentField`, `FieldConfig` — deposit/sample/step/clear   |
//! | [`error`]  | `FieldError`, `FieldResult<T>`                            |
//!
//! # Model
//!
//! Each field holds one scalar concentration per grid cell and advances by an
//! explicit-Euler step of the isotropic diffusion equation with linear decay:
//!
//! ```text
//! next = c + dt·D·lap(c) − dt·ρ·c      (clamped to ≥ 0)
//! ```
//!
//! where `lap` is the 5-point discrete Laplacian.  The outermost ring of
//! cells is copied through unchanged every step, so scent can neither be
//! created at nor diffuse across the boundary.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Computes interior rows on Rayon's thread pool.      |

pub mod error;
pub mod field;

#[cfg(test)]
mod tests;

pub use error::{FieldError, FieldResult};
pub use field::{FieldConfig, ScentField};
