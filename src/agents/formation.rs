// Team-formation response parsing
//
// Pure text-to-structure step, kept apart from the model call so it can be
// exercised on canned responses.

use super::errors::FormationParseError;
use super::types::TeamFormation;

const TEAM_MEMBERS_MARKER: &str = "Team Members:";
const RATIONALE_MARKER: &str = "Rationale:";

/// Extract team members and rationale from a team-formation response
///
/// Lines are matched after trimming. When a marker appears more than once the
/// last occurrence wins.
///
/// # Example
/// ```
/// use taskforce::agents::formation::parse_team_formation;
///
/// let team = parse_team_formation("Team Members: Agent 1, Agent 3\nRationale: skill fit")
///     .expect("well-formed response");
///
/// assert_eq!(team.members, vec!["Agent 1", "Agent 3"]);
/// assert_eq!(team.rationale, "skill fit");
/// ```
pub fn parse_team_formation(response: &str) -> Result<TeamFormation, FormationParseError> {
    let mut members: Vec<String> = Vec::new();
    let mut rationale: Option<String> = None;

    for line in response.trim().lines() {
        let line = line.trim();
        if line.starts_with(TEAM_MEMBERS_MARKER) {
            members = split_members(line);
        } else if line.starts_with(RATIONALE_MARKER) {
            rationale = line.split_once(':').map(|(_, rest)| rest.trim().to_string());
        }
    }

    if members.is_empty() {
        return Err(FormationParseError::MissingTeamMembers);
    }

    match rationale {
        Some(rationale) if !rationale.is_empty() => Ok(TeamFormation { members, rationale }),
        _ => Err(FormationParseError::MissingRationale),
    }
}

fn split_members(line: &str) -> Vec<String> {
    // Everything after the last colon, so "Team Members: IDs: a, b" still yields a and b.
    let list = line.rsplit(':').next().unwrap_or_default().trim();
    let list = list.strip_prefix('[').unwrap_or(list);
    let list = list.strip_suffix(']').unwrap_or(list);

    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
