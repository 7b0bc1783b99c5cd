use ant_agent::AgentError;
use ant_colony::ColonyError;
use ant_field::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} count {got} does not match ant count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("field error: {0}")]
    Field(#[from] FieldError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("colony error: {0}")]
    Colony(#[from] ColonyError),
}

pub type SimResult<T> = Result<T, SimError>;
