use thiserror::Error;

use super::state::{AgentState, Transition};

/// Errors that can occur in the agent system
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("LLM API error: {0}")]
    LlmError(String),

    #[error("Invalid state transition for {agent}: cannot {transition} while {state}")]
    InvalidTransition {
        agent: String,
        state: AgentState,
        transition: Transition,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AgentResult<T> = Result<T, AgentError>;

/// Reasons a team-formation response could not be turned into a team
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormationParseError {
    #[error("response has no usable 'Team Members:' line")]
    MissingTeamMembers,

    #[error("response has no usable 'Rationale:' line")]
    MissingRationale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_message_names_agent_and_state() {
        let err = AgentError::InvalidTransition {
            agent: "Agent 2".to_string(),
            state: AgentState::Executing,
            transition: Transition::AssignTask,
        };

        assert_eq!(
            err.to_string(),
            "Invalid state transition for Agent 2: cannot assign_task while executing"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AgentError = io.into();

        assert!(matches!(err, AgentError::Io(_)));
    }
}
