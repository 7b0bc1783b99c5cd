//! Navigation-subsystem error type.

use thiserror::Error;

/// Errors produced by `ant-nav`.  Runtime queries never error — an
/// unresolvable target is `None`, by contract — so only construction can
/// fail.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("walkable half-extent {0} invalid (must be finite and > 0)")]
    InvalidExtent(f32),

    #[error("movement speed {0} invalid (must be finite and > 0)")]
    InvalidSpeed(f32),
}

pub type NavResult<T> = Result<T, NavError>;
