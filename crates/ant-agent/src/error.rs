//! Agent-subsystem error type.

use thiserror::Error;

/// Errors produced by `ant-agent`.  Steering itself never errors — a failed
/// sense degrades to "no goal" — so only configuration can fail.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
