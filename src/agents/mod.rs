// Agent system modules
//
// This module contains the agent lifecycle state machine, team formation
// from model responses, and concurrent task execution.

pub mod errors;
pub mod formation;
pub mod llm;
pub mod manager;
pub mod prompts;
pub mod state;
pub mod types;
pub mod worker;

// Re-export main types
pub use errors::{AgentError, AgentResult, FormationParseError};
pub use llm::LanguageModel;
pub use manager::TeamAllocator;
pub use state::{AgentState, Transition};
pub use types::{FormationOutcome, Task, TeamFormation};
pub use worker::Agent;
