use serde::Serialize;
use trackdeck_types::{GoalCadence, Record, Snapshot};

/// High-level counts for the dashboard's stat row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub applications: usize,
    pub coding_problems: usize,
    pub projects: usize,
    pub contacts: usize,
    pub meetings: usize,
    pub goals_done: usize,
    pub goals_total: usize,
}

fn count_done(goals: &[Record]) -> usize {
    goals.iter().filter(|goal| goal.flag("completed")).count()
}

pub fn summarize(snapshot: &Snapshot) -> DashboardSummary {
    let goals_total = GoalCadence::ALL
        .iter()
        .map(|&cadence| snapshot.goals(cadence).len())
        .sum();
    let goals_done = GoalCadence::ALL
        .iter()
        .map(|&cadence| count_done(snapshot.goals(cadence)))
        .sum();

    DashboardSummary {
        applications: snapshot.job_applications.len(),
        coding_problems: snapshot.coding_problems.len(),
        projects: snapshot.projects.len(),
        contacts: snapshot.networking_contacts.len(),
        meetings: snapshot.meetings.len(),
        goals_done,
        goals_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_collections_and_goal_completion() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "job_applications": [{"id": 1}, {"id": 2}],
                "projects": [{"id": 3}],
                "daily_goals": [
                    {"id": 4, "completed": true},
                    {"id": 5, "completed": false}
                ],
                "weekly_goals": [{"id": 6, "completed": true}],
                "monthly_goals": []
            }"#,
        )
        .unwrap();

        let summary = summarize(&snapshot);
        assert_eq!(summary.applications, 2);
        assert_eq!(summary.coding_problems, 0);
        assert_eq!(summary.projects, 1);
        assert_eq!(summary.contacts, 0);
        assert_eq!(summary.meetings, 0);
        assert_eq!(summary.goals_done, 2);
        assert_eq!(summary.goals_total, 3);
    }

    #[test]
    fn empty_snapshot_is_all_zeros() {
        let summary = summarize(&Snapshot::default());
        assert_eq!(summary.goals_total, 0);
        assert_eq!(summary.applications, 0);
    }
}
