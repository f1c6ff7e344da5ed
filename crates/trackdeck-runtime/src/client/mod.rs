mod http;
mod local;

pub use http::HttpClient;
pub use local::LocalClient;

use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use trackdeck_types::{GoalCadence, RecordId, Snapshot};

/// The collaborator contract consumed by the dashboard.
///
/// One snapshot-fetch operation plus per-collection mutations. The engine
/// side is transport-agnostic; failures carry a human-readable message that
/// is surfaced verbatim near the triggering control.
#[async_trait]
pub trait DashboardClient: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<Snapshot>;
    async fn mutate(&self, mutation: Mutation) -> Result<()>;
}

/// A new job application.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobPayload {
    pub job_title: String,
    pub company: String,
    pub job_link: String,
    pub applied_date: String,
    pub result_date: String,
    pub status: String,
    pub notes: String,
}

/// A new coding-practice entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CodingPayload {
    pub leetcode_number: i64,
    pub title: String,
    pub pattern: String,
    pub problem_link: String,
    pub difficulty: String,
    pub already_solved: bool,
}

/// A new project entry. `tech_stack` is already split into items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub repo_url: String,
    pub active: bool,
    pub tech_stack: Vec<String>,
    pub summary: String,
}

/// A new networking contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactPayload {
    pub person_name: String,
    pub how_met: String,
    pub linkedin_connected: bool,
    pub company: String,
    pub position: String,
    pub notes: String,
}

/// Status change for an existing job application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobStatusUpdate {
    pub id: RecordId,
    pub status: String,
}

/// Draft save for an existing goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalUpdate {
    #[serde(rename = "type")]
    pub cadence: GoalCadence,
    pub id: RecordId,
    pub description: String,
    pub completed: bool,
}

/// Every mutation the dashboard can send to the data service.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateJob(JobPayload),
    CreateCoding(CodingPayload),
    CreateProject(ProjectPayload),
    CreateContact(ContactPayload),
    UpdateJobStatus(JobStatusUpdate),
    UpdateGoal(GoalUpdate),
}

/// Split a comma-separated tech-stack input into trimmed, non-empty items.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| item.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_stack_splits_and_trims() {
        assert_eq!(
            parse_tech_stack(" rust , axum,, postgres "),
            vec!["rust", "axum", "postgres"]
        );
        assert!(parse_tech_stack("").is_empty());
    }

    #[test]
    fn goal_update_serializes_with_type_tag() {
        let update = GoalUpdate {
            cadence: GoalCadence::Weekly,
            id: RecordId::from(7),
            description: "ship it".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["type"], "weekly");
        assert_eq!(json["id"], "7");
        assert_eq!(json["completed"], true);
    }
}
