use crate::presentation::view_models::StatViewModel;
use trackdeck_engine::summarize;
use trackdeck_types::Snapshot;

pub fn present_summary(snapshot: &Snapshot) -> Vec<StatViewModel> {
    let summary = summarize(snapshot);
    vec![
        StatViewModel {
            label: "Applications",
            value: summary.applications.to_string(),
        },
        StatViewModel {
            label: "Coding Problems",
            value: summary.coding_problems.to_string(),
        },
        StatViewModel {
            label: "Projects",
            value: summary.projects.to_string(),
        },
        StatViewModel {
            label: "Contacts",
            value: summary.contacts.to_string(),
        },
        StatViewModel {
            label: "Goals Done",
            value: format!("{} / {}", summary.goals_done, summary.goals_total),
        },
        StatViewModel {
            label: "Meetings",
            value: summary.meetings.to_string(),
        },
    ]
}
