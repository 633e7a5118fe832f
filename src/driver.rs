// Top-level run: sequential team formation, then one concurrent execution pass.

use tracing::info;

use crate::agents::errors::AgentResult;
use crate::agents::prompts::ADVERTISED_ROSTER;
use crate::agents::{Agent, TeamAllocator};

/// Task descriptions handled by a default run, in order
pub const DEFAULT_TASKS: [&str; 3] = [
    "Build the user interface",
    "Set up the database",
    "Design the user experience",
];

/// The fixed agent pool created at startup
pub fn default_roster() -> Vec<Agent> {
    ADVERTISED_ROSTER
        .iter()
        .map(|profile| Agent::new(profile.name, profile.skills.iter().copied()))
        .collect()
}

/// Counts describing one driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub tasks_requested: usize,
    pub tasks_staffed: usize,
    pub agents_executed: Vec<String>,
}

/// Form a team for each task in order, then execute all assigned agents once
///
/// Tasks that end up with no team are dropped without error.
pub async fn run(allocator: &mut TeamAllocator, tasks: &[&str]) -> AgentResult<RunSummary> {
    let mut tasks_staffed = 0;
    for task in tasks {
        let outcome = allocator.form_team(task).await?;
        if outcome.is_staffed() {
            tasks_staffed += 1;
        } else {
            info!("No agents assigned to '{}'; it will not run", task);
        }
    }

    let agents_executed = allocator.coordinate_execution().await?;

    for agent in allocator.agents() {
        info!(agent = %agent.name(), state = %agent.state(), "Final agent status");
    }

    Ok(RunSummary {
        tasks_requested: tasks.len(),
        tasks_staffed,
        agents_executed,
    })
}
