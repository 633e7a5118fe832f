// Prompt templates for LLM interactions
//
// This module contains all prompt templates used by the agent system.
// Prompts are versioned for reproducibility.

use std::collections::HashMap;

use super::types::AgentProfile;

/// Roster advertised to the model during team formation.
///
/// This is fixed text; it is not read back from the live agents.
pub const ADVERTISED_ROSTER: [AgentProfile; 3] = [
    AgentProfile {
        name: "Agent 1",
        skills: &["frontend", "backend"],
    },
    AgentProfile {
        name: "Agent 2",
        skills: &["backend"],
    },
    AgentProfile {
        name: "Agent 3",
        skills: &["frontend", "design"],
    },
];

/// Prompt template structure
pub struct PromptTemplate {
    pub name: String,
    pub version: String,
    pub user_template: String,
}

impl PromptTemplate {
    /// Identifier used in logs, e.g. `task_execution@1.0.0`
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Render the user template with variables
    ///
    /// Placeholders look like `{{key}}`. Substituted values are never
    /// re-scanned, and placeholders with no matching variable are left as-is.
    pub fn render(&self, variables: &HashMap<&str, String>) -> String {
        tracing::debug!(template = %self.id(), "Rendering prompt");
        let mut out = String::with_capacity(self.user_template.len());
        let mut rest = self.user_template.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            match after_open.find("}}") {
                Some(close) => {
                    let key = &after_open[..close];
                    match variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[close + 2..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Format the advertised roster as a bullet list
pub fn roster_listing(roster: &[AgentProfile]) -> String {
    roster
        .iter()
        .map(|profile| format!("- {}: {}", profile.name, profile.skills.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the team-formation prompt for one task description
pub fn team_formation_prompt(task_description: &str) -> String {
    let variables = HashMap::from([
        ("task", task_description.to_string()),
        ("roster", roster_listing(&ADVERTISED_ROSTER)),
    ]);
    library::team_formation().render(&variables)
}

/// Render the execution prompt an agent sends for its task
pub fn task_execution_prompt(name: &str, skills: &[String], task_description: &str) -> String {
    let variables = HashMap::from([
        ("name", name.to_string()),
        ("skills", skills.join(", ")),
        ("task", task_description.to_string()),
    ]);
    library::task_execution().render(&variables)
}

pub mod library {
    use super::PromptTemplate;

    pub fn team_formation() -> PromptTemplate {
        PromptTemplate {
            name: "team_formation".to_string(),
            version: "1.0.0".to_string(),
            user_template: "The task is described as follows: \"{{task}}\".\n\
                            Form the most suitable team of agents based on their skills. \
                            Provide the team member IDs and the rationale for the team \
                            formation.\n\n\
                            Available agents and their skills:\n\
                            {{roster}}\n\n\
                            Provide the response in the following format:\n\
                            Team Members: [agent_ids]\n\
                            Rationale: [rationale]"
                .to_string(),
        }
    }

    pub fn task_execution() -> PromptTemplate {
        PromptTemplate {
            name: "task_execution".to_string(),
            version: "1.0.0".to_string(),
            user_template: "{{name}}, imagine you are an AI agent with skills in {{skills}}. \
                            Please provide a detailed response on how you would execute the \
                            following task: {{task}}. Be specific and provide relevant examples \
                            or steps."
                .to_string(),
        }
    }
}
