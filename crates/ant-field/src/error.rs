//! Field-subsystem error type.

use thiserror::Error;

/// Errors produced by `ant-field`.  All are construction-time: once a field
/// exists, every operation on it is total.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("grid dimensions {width}x{height} invalid (both must be >= 2)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("world size {0} invalid (must be finite and > 0)")]
    InvalidWorldSize(f32),
}

pub type FieldResult<T> = Result<T, FieldError>;
