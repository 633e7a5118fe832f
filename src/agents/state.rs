/// Lifecycle state of an agent
///
/// # Transitions
/// ```text
/// Idle --assign_task--> Assigned --start_execution--> Executing
///   ^                                                     |
///   +------reset------- Completed <----complete_task------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentState {
    /// Waiting for work; never holds a task
    Idle,
    /// Holds a task that has not started yet
    Assigned,
    /// Waiting on the language model
    Executing,
    /// Holds a finished task and its result
    Completed,
}

/// Named transitions of the agent state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    AssignTask,
    StartExecution,
    CompleteTask,
    Reset,
}

/// Every legal `(source, transition, target)` triple.
pub const TRANSITIONS: [(AgentState, Transition, AgentState); 4] = [
    (AgentState::Idle, Transition::AssignTask, AgentState::Assigned),
    (AgentState::Assigned, Transition::StartExecution, AgentState::Executing),
    (AgentState::Executing, Transition::CompleteTask, AgentState::Completed),
    (AgentState::Completed, Transition::Reset, AgentState::Idle),
];

impl AgentState {
    /// Looks up the state reached by applying `transition`, if the table allows it
    ///
    /// # Example
    /// ```
    /// use taskforce::agents::state::{AgentState, Transition};
    ///
    /// assert_eq!(
    ///     AgentState::Idle.next(Transition::AssignTask),
    ///     Some(AgentState::Assigned)
    /// );
    /// assert_eq!(AgentState::Idle.next(Transition::CompleteTask), None);
    /// ```
    pub fn next(self, transition: Transition) -> Option<AgentState> {
        TRANSITIONS
            .iter()
            .find(|(source, t, _)| *source == self && *t == transition)
            .map(|(_, _, target)| *target)
    }

    /// Whether an agent in this state carries a task
    pub fn holds_task(self) -> bool {
        !matches!(self, AgentState::Idle)
    }
}

impl std::fmt::Display for AgentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentState::Idle => write!(f, "idle"),
            AgentState::Assigned => write!(f, "assigned"),
            AgentState::Executing => write!(f, "executing"),
            AgentState::Completed => write!(f, "completed"),
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::AssignTask => write!(f, "assign_task"),
            Transition::StartExecution => write!(f, "start_execution"),
            Transition::CompleteTask => write!(f, "complete_task"),
            Transition::Reset => write!(f, "reset"),
        }
    }
}
