//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `AntError` via `From` impls, or keep them separate and wrap `AntError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::{AntId, SourceId};

/// The top-level error type for `ant-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AntError {
    #[error("ant {0} not found")]
    AntNotFound(AntId),

    #[error("food source {0} not found")]
    SourceNotFound(SourceId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ant-*` crates.
pub type AntResult<T> = Result<T, AntError>;
