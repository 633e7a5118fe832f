use tracing::{debug, info};

use super::errors::{AgentError, AgentResult};
use super::llm::LanguageModel;
use super::prompts::task_execution_prompt;
use super::state::{AgentState, Transition};
use super::types::Task;

/// A worker that holds at most one task and executes it through the model
///
/// # Invariants
/// - `state == Idle` exactly when no task is attached
/// - State only changes along the transition table in [`super::state`]
#[derive(Debug, Clone)]
pub struct Agent {
    name: String,
    skills: Vec<String>,
    state: AgentState,
    task: Option<Task>,
    history: Vec<(AgentState, Transition, AgentState)>,
}

impl Agent {
    /// Create an idle agent
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        skills: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            skills: skills.into_iter().map(Into::into).collect(),
            state: AgentState::Idle,
            task: None,
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    /// Every transition taken so far, oldest first
    pub fn history(&self) -> &[(AgentState, Transition, AgentState)] {
        &self.history
    }

    /// Attach `task` and move Idle -> Assigned
    pub fn assign_task(&mut self, task: Task) -> AgentResult<()> {
        self.transition(Transition::AssignTask)?;
        info!(
            agent = %self.name,
            task_id = %task.id(),
            "Task '{}' assigned to {} with rationale: {}",
            task.description(),
            self.name,
            task.rationale()
        );
        self.task = Some(task);
        Ok(())
    }

    /// Move Assigned -> Executing
    pub fn start_execution(&mut self) -> AgentResult<()> {
        self.transition(Transition::StartExecution)
    }

    /// Record the completion and move Executing -> Completed
    pub fn complete_task(&mut self, execution_result: impl Into<String>) -> AgentResult<()> {
        self.transition(Transition::CompleteTask)?;
        if let Some(task) = self.task.as_mut() {
            task.record_result(execution_result.into());
        }
        Ok(())
    }

    /// Move Completed -> Idle, handing back the finished task
    pub fn reset(&mut self) -> AgentResult<Option<Task>> {
        self.transition(Transition::Reset)?;
        Ok(self.task.take())
    }

    /// Run the attached task through the model
    ///
    /// A no-op when there is nothing waiting to run (idle or already
    /// completed). Model failures propagate and leave the agent executing.
    pub async fn execute_task(&mut self, llm: &dyn LanguageModel) -> AgentResult<()> {
        let description = match (&self.task, self.state) {
            (Some(task), state) if state != AgentState::Completed => task.description().to_string(),
            _ => {
                debug!(agent = %self.name, state = %self.state, "Nothing to execute");
                return Ok(());
            }
        };

        self.start_execution()?;
        info!(agent = %self.name, "{} executing task: {}", self.name, description);

        let prompt = task_execution_prompt(&self.name, &self.skills, &description);
        let response = llm.complete(&prompt).await?;

        info!(
            agent = %self.name,
            "{} completed task: {} with result: {}",
            self.name,
            description,
            response
        );
        self.complete_task(response)
    }

    fn transition(&mut self, transition: Transition) -> AgentResult<()> {
        let from = self.state;
        let to = from.next(transition).ok_or_else(|| AgentError::InvalidTransition {
            agent: self.name.clone(),
            state: from,
            transition,
        })?;

        self.state = to;
        self.history.push((from, transition, to));
        info!(
            agent = %self.name,
            from = %from,
            to = %to,
            "{} {}: {} -> {}",
            self.name,
            transition,
            from,
            to
        );
        Ok(())
    }
}
