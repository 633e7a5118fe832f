use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A unit of work held by a single agent
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: Uuid,
    description: String,
    rationale: String,
    execution_result: Option<String>,
    assigned_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a task from a description and the team-formation rationale
    pub fn new(description: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            rationale: rationale.into(),
            execution_result: None,
            assigned_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    /// The raw completion produced while executing, once finished
    pub fn execution_result(&self) -> Option<&str> {
        self.execution_result.as_deref()
    }

    pub fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub(crate) fn record_result(&mut self, result: String) {
        self.execution_result = Some(result);
        self.completed_at = Some(Utc::now());
    }
}

/// A named agent and its skills as advertised to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// Team selection extracted from a team-formation response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamFormation {
    pub members: Vec<String>,
    pub rationale: String,
}

/// What `form_team` did with one task description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormationOutcome {
    /// The response parsed; zero or more agents were assigned
    Formed {
        assigned: Vec<String>,
        skipped: Vec<String>,
        unknown: Vec<String>,
        rationale: String,
    },
    /// The response could not be parsed and the task was dropped
    Unparsed(String),
}

impl FormationOutcome {
    /// Names of the agents that received the task
    pub fn assigned(&self) -> &[String] {
        match self {
            FormationOutcome::Formed { assigned, .. } => assigned,
            FormationOutcome::Unparsed(_) => &[],
        }
    }

    pub fn is_staffed(&self) -> bool {
        !self.assigned().is_empty()
    }
}
