//! Colony-subsystem error type.

use thiserror::Error;

/// Errors produced by `ant-colony`.  All are construction-time configuration
/// problems; runtime depletion and spawn failures degrade gracefully instead.
#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("spawn radius {0} invalid (must be finite and > 0)")]
    InvalidSpawnRadius(f32),

    #[error("respawn delay {0} invalid (must be finite and >= 0)")]
    InvalidRespawnDelay(f32),

    #[error("pile amount must be >= 1")]
    EmptyPileAmount,
}

pub type ColonyResult<T> = Result<T, ColonyError>;
