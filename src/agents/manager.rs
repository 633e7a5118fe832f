use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use super::errors::{AgentError, AgentResult};
use super::formation::parse_team_formation;
use super::llm::LanguageModel;
use super::prompts::{team_formation_prompt, ADVERTISED_ROSTER};
use super::state::AgentState;
use super::types::{FormationOutcome, Task};
use super::worker::Agent;

/// Forms teams from model responses and coordinates their execution
///
/// Owns the agent roster. Team formation runs one task at a time; execution
/// lends each assigned agent to exactly one concurrent unit.
pub struct TeamAllocator {
    llm: Arc<dyn LanguageModel>,
    agents: Vec<Agent>,
}

impl TeamAllocator {
    /// Create an allocator over a fixed roster
    pub fn new(llm: Arc<dyn LanguageModel>, agents: Vec<Agent>) -> Self {
        if !matches_advertised_roster(&agents) {
            warn!(
                "Live roster differs from the roster advertised to the model; \
                 team formation will see stale agent skills"
            );
        }

        Self { llm, agents }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.name() == name)
    }

    pub fn agent_mut(&mut self, name: &str) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|agent| agent.name() == name)
    }

    /// Ask the model for a team and assign the idle members
    ///
    /// An unparseable response drops the task and is not an error. A failed
    /// model call is.
    pub async fn form_team(&mut self, task_description: &str) -> AgentResult<FormationOutcome> {
        let prompt = team_formation_prompt(task_description);
        let response = self.llm.complete(&prompt).await?;
        info!("Team formation response for '{}': {}", task_description, response);

        let formation = match parse_team_formation(&response) {
            Ok(formation) => formation,
            Err(e) => {
                warn!(
                    "Unable to parse the response and form the team for '{}': {}",
                    task_description, e
                );
                return Ok(FormationOutcome::Unparsed(e.to_string()));
            }
        };

        let mut unknown: Vec<String> = Vec::new();
        for member in &formation.members {
            let on_roster = self.agents.iter().any(|agent| agent.name() == member);
            if !on_roster && !unknown.contains(member) {
                debug!(member = %member, "Team member not on roster");
                unknown.push(member.clone());
            }
        }

        // Each roster agent is considered once, in roster order, however often
        // the response names it.
        let mut assigned = Vec::new();
        let mut skipped = Vec::new();
        for agent in self
            .agents
            .iter_mut()
            .filter(|agent| formation.members.iter().any(|m| m == agent.name()))
        {
            if agent.state() == AgentState::Idle {
                agent.assign_task(Task::new(task_description, formation.rationale.clone()))?;
                assigned.push(agent.name().to_string());
            } else {
                info!(
                    "Agent {} is already assigned a task ({}). Skipping task allocation.",
                    agent.name(),
                    agent.state()
                );
                skipped.push(agent.name().to_string());
            }
        }

        Ok(FormationOutcome::Formed {
            assigned,
            skipped,
            unknown,
            rationale: formation.rationale,
        })
    }

    /// Execute every currently assigned agent concurrently
    ///
    /// Waits for all units to finish, then returns the names of the agents
    /// that completed, or the first error raised. Nothing is rolled back.
    pub async fn coordinate_execution(&mut self) -> AgentResult<Vec<String>> {
        let llm = self.llm.as_ref();
        let units: Vec<_> = self
            .agents
            .iter_mut()
            .filter(|agent| agent.state() == AgentState::Assigned)
            .map(|agent| async move {
                agent.execute_task(llm).await?;
                Ok::<_, AgentError>(agent.name().to_string())
            })
            .collect();

        info!("Coordinating execution for {} assigned agents", units.len());

        let mut completed = Vec::with_capacity(units.len());
        let mut first_error = None;
        for result in join_all(units).await {
            match result {
                Ok(name) => completed.push(name),
                Err(e) if first_error.is_none() => first_error = Some(e),
                Err(e) => warn!("Additional execution failure: {}", e),
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(completed),
        }
    }
}

fn matches_advertised_roster(agents: &[Agent]) -> bool {
    agents.len() == ADVERTISED_ROSTER.len()
        && agents.iter().zip(ADVERTISED_ROSTER.iter()).all(|(agent, profile)| {
            agent.name() == profile.name
                && agent.skills().iter().eq(profile.skills.iter().copied())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedModel(&'static str);

    #[async_trait]
    impl LanguageModel for FixedModel {
        async fn complete(&self, _prompt: &str) -> AgentResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn roster() -> Vec<Agent> {
        crate::driver::default_roster()
    }

    #[test]
    fn test_advertised_roster_matches_default_agents() {
        assert!(matches_advertised_roster(&roster()));
    }

    #[test]
    fn test_roster_drift_detected() {
        let mut agents = roster();
        agents[1] = Agent::new("Agent 2", ["backend", "devops"]);

        assert!(!matches_advertised_roster(&agents));
        assert!(!matches_advertised_roster(&agents[..2]));
    }

    #[tokio::test]
    async fn test_form_team_reports_unknown_members() {
        let llm = Arc::new(FixedModel("Team Members: Agent 1, Agent 9\nRationale: fit"));
        let mut allocator = TeamAllocator::new(llm, roster());

        let outcome = allocator.form_team("Build the user interface").await.unwrap();

        assert_eq!(
            outcome,
            FormationOutcome::Formed {
                assigned: vec!["Agent 1".to_string()],
                skipped: vec![],
                unknown: vec!["Agent 9".to_string()],
                rationale: "fit".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_form_team_duplicate_member_assigned_once() {
        let llm = Arc::new(FixedModel(
            "Team Members: Agent 1, Agent 9, Agent 1, Agent 9\nRationale: fit",
        ));
        let mut allocator = TeamAllocator::new(llm, roster());

        let outcome = allocator.form_team("Build the user interface").await.unwrap();

        assert_eq!(
            outcome,
            FormationOutcome::Formed {
                assigned: vec!["Agent 1".to_string()],
                skipped: vec![],
                unknown: vec!["Agent 9".to_string()],
                rationale: "fit".to_string(),
            }
        );
        let history = allocator.agent("Agent 1").unwrap().history();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_form_team_assigns_in_roster_order() {
        let llm = Arc::new(FixedModel("Team Members: Agent 3, Agent 1\nRationale: fit"));
        let mut allocator = TeamAllocator::new(llm, roster());

        let outcome = allocator.form_team("Build the user interface").await.unwrap();

        assert_eq!(outcome.assigned(), ["Agent 1".to_string(), "Agent 3".to_string()]);
    }

    #[tokio::test]
    async fn test_form_team_model_failure_propagates() {
        struct Down;

        #[async_trait]
        impl LanguageModel for Down {
            async fn complete(&self, _prompt: &str) -> AgentResult<String> {
                Err(AgentError::LlmError("connection refused".to_string()))
            }
        }

        let mut allocator = TeamAllocator::new(Arc::new(Down), roster());
        let result = allocator.form_team("Set up the database").await;

        assert!(matches!(result, Err(AgentError::LlmError(_))));
        assert!(allocator.agents().iter().all(|a| a.state() == AgentState::Idle));
    }

    #[tokio::test]
    async fn test_coordinate_with_nothing_assigned() {
        let mut allocator = TeamAllocator::new(Arc::new(FixedModel("unused")), roster());

        let completed = allocator.coordinate_execution().await.unwrap();

        assert!(completed.is_empty());
    }

    #[test]
    fn test_agent_lookup() {
        let mut allocator = TeamAllocator::new(Arc::new(FixedModel("unused")), roster());

        assert_eq!(allocator.agent("Agent 3").unwrap().skills()[1], "design");
        assert!(allocator.agent("Agent 4").is_none());
        assert!(allocator.agent_mut("Agent 1").is_some());
    }
}
