use crate::filter::filter_records;
use trackdeck_types::{Column, GoalCadence, Record, SectionKey, Snapshot};

const JOB_COLUMNS: &[Column] = &[
    Column { key: "job_title", label: "Title" },
    Column { key: "company", label: "Company" },
    Column { key: "status", label: "Status" },
    Column { key: "applied_date", label: "Applied" },
    Column { key: "result_date", label: "Result" },
    Column { key: "job_link", label: "Link" },
    Column { key: "notes", label: "Notes" },
];

const CODING_COLUMNS: &[Column] = &[
    Column { key: "leetcode_number", label: "Number" },
    Column { key: "title", label: "Title" },
    Column { key: "pattern", label: "Pattern" },
    Column { key: "difficulty", label: "Difficulty" },
    Column { key: "already_solved", label: "Solved" },
    Column { key: "problem_link", label: "Link" },
    Column { key: "notes", label: "Notes" },
];

const PROJECT_COLUMNS: &[Column] = &[
    Column { key: "name", label: "Name" },
    Column { key: "active", label: "Active" },
    Column { key: "tech_stack", label: "Tech Stack" },
    Column { key: "repo_url", label: "Repo" },
    Column { key: "summary", label: "Summary" },
];

const NETWORKING_COLUMNS: &[Column] = &[
    Column { key: "person_name", label: "Name" },
    Column { key: "company", label: "Company" },
    Column { key: "position", label: "Role" },
    Column { key: "linkedin_connected", label: "LinkedIn" },
    Column { key: "how_met", label: "How Met" },
    Column { key: "notes", label: "Notes" },
];

const DAILY_GOAL_COLUMNS: &[Column] = &[
    Column { key: "description", label: "Description" },
    Column { key: "target_date", label: "Date" },
    Column { key: "completed", label: "Done" },
];

const WEEKLY_GOAL_COLUMNS: &[Column] = &[
    Column { key: "description", label: "Description" },
    Column { key: "target_date", label: "Week Of" },
    Column { key: "completed", label: "Done" },
];

const MONTHLY_GOAL_COLUMNS: &[Column] = &[
    Column { key: "description", label: "Description" },
    Column { key: "target_date", label: "Month Of" },
    Column { key: "completed", label: "Done" },
];

const MEETING_COLUMNS: &[Column] = &[
    Column { key: "session_name", label: "Session" },
    Column { key: "session_type", label: "Type" },
    Column { key: "session_time", label: "Time" },
    Column { key: "location", label: "Location" },
    Column { key: "organizer", label: "Organizer" },
    Column { key: "company", label: "Company" },
];

/// Column projection of a base section.
pub fn columns_for(key: SectionKey) -> &'static [Column] {
    match key {
        SectionKey::Jobs => JOB_COLUMNS,
        SectionKey::Coding => CODING_COLUMNS,
        SectionKey::Projects => PROJECT_COLUMNS,
        SectionKey::Networking => NETWORKING_COLUMNS,
        SectionKey::DailyGoals => DAILY_GOAL_COLUMNS,
        SectionKey::WeeklyGoals => WEEKLY_GOAL_COLUMNS,
        SectionKey::MonthlyGoals => MONTHLY_GOAL_COLUMNS,
        SectionKey::Meetings => MEETING_COLUMNS,
        SectionKey::Search => &[],
    }
}

/// Tab label of a section.
pub fn section_label(key: SectionKey) -> &'static str {
    match key {
        SectionKey::Jobs => "Jobs",
        SectionKey::Coding => "Coding",
        SectionKey::Projects => "Projects",
        SectionKey::Networking => "Networking",
        SectionKey::DailyGoals => "Daily Goals",
        SectionKey::WeeklyGoals => "Weekly Goals",
        SectionKey::MonthlyGoals => "Monthly Goals",
        SectionKey::Meetings => "Meetings",
        SectionKey::Search => "Search Results",
    }
}

/// One named view over a collection: key, label, column projection, and the
/// records it is bound to. Recomputed from the snapshot on every render.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub key: SectionKey,
    pub label: &'static str,
    pub goal_cadence: Option<GoalCadence>,
    pub columns: &'static [Column],
    pub items: &'a [Record],
}

/// The fixed eight-section catalogue bound to a snapshot's collections.
pub fn base_sections(snapshot: &Snapshot) -> Vec<Section<'_>> {
    SectionKey::BASE
        .iter()
        .map(|&key| Section {
            key,
            label: section_label(key),
            goal_cadence: key.goal_cadence(),
            columns: columns_for(key),
            items: snapshot.collection(key),
        })
        .collect()
}

/// One base section's contribution to the search-results view.
#[derive(Debug, Clone)]
pub struct SectionMatches<'a> {
    pub section: Section<'a>,
    pub matches: Vec<&'a Record>,
}

/// The synthetic search-results section: per-section match groups (sections
/// without matches dropped) and the total match count.
#[derive(Debug, Clone)]
pub struct SearchTab<'a> {
    pub groups: Vec<SectionMatches<'a>>,
    pub total: usize,
}

fn search_tab<'a>(sections: &[Section<'a>], query: &str) -> SearchTab<'a> {
    let groups: Vec<SectionMatches<'a>> = sections
        .iter()
        .map(|&section| SectionMatches {
            section,
            matches: filter_records(section.items, section.columns, query),
        })
        .filter(|group| !group.matches.is_empty())
        .collect();
    let total = groups.iter().map(|group| group.matches.len()).sum();
    SearchTab { groups, total }
}

/// Everything the tab bar renders: the synthetic search tab (when a query
/// is active) followed by the base catalogue.
#[derive(Debug, Clone)]
pub struct RenderSet<'a> {
    pub search: Option<SearchTab<'a>>,
    pub sections: Vec<Section<'a>>,
}

impl<'a> RenderSet<'a> {
    /// Rendered section keys, search first when present.
    pub fn keys(&self) -> Vec<SectionKey> {
        let mut keys = Vec::with_capacity(self.sections.len() + 1);
        if self.search.is_some() {
            keys.push(SectionKey::Search);
        }
        keys.extend(self.sections.iter().map(|s| s.key));
        keys
    }

    pub fn section(&self, key: SectionKey) -> Option<&Section<'a>> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Keep the active key if it is still rendered, otherwise fall back to
    /// the first rendered section.
    pub fn resolve_active(&self, current: SectionKey) -> SectionKey {
        let keys = self.keys();
        if keys.contains(&current) {
            current
        } else {
            keys.first().copied().unwrap_or(SectionKey::Jobs)
        }
    }
}

/// Build the full render set for a snapshot and (possibly blank) query.
pub fn render_set<'a>(snapshot: &'a Snapshot, query: &str) -> RenderSet<'a> {
    let sections = base_sections(snapshot);
    let search = if query.trim().is_empty() {
        None
    } else {
        Some(search_tab(&sections, query))
    };
    RenderSet { search, sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        serde_json::from_str(
            r#"{
                "job_applications": [
                    {"id": 1, "job_title": "Backend Engineer", "company": "Google", "status": "applied"},
                    {"id": 2, "job_title": "Platform Engineer", "company": "Acme", "status": "interview"},
                    {"id": 3, "job_title": "SRE", "company": "Google Cloud", "status": "applied"}
                ],
                "coding_problems": [
                    {"id": 10, "title": "Two Sum", "pattern": "hash map", "difficulty": "easy"}
                ],
                "daily_goals": [
                    {"id": 20, "description": "apply to two roles", "completed": false}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn catalogue_is_fixed_and_ordered() {
        let snapshot = snapshot();
        let sections = base_sections(&snapshot);

        let keys: Vec<_> = sections.iter().map(|s| s.key).collect();
        assert_eq!(keys, SectionKey::BASE);

        // Missing collections bind to empty slices, never an error.
        let meetings = &sections[7];
        assert!(meetings.items.is_empty());
        assert_eq!(meetings.label, "Meetings");
        assert_eq!(sections[0].items.len(), 3);
        assert_eq!(sections[4].goal_cadence, Some(GoalCadence::Daily));
        assert_eq!(sections[0].goal_cadence, None);
    }

    #[test]
    fn blank_query_renders_no_search_tab() {
        let snapshot = snapshot();
        let set = render_set(&snapshot, "");
        assert!(set.search.is_none());
        assert_eq!(set.keys().first(), Some(&SectionKey::Jobs));
    }

    #[test]
    fn search_tab_groups_matches_per_section() {
        let snapshot = snapshot();
        let set = render_set(&snapshot, "google");

        let search = set.search.as_ref().unwrap();
        // Jobs has two matches; coding has none and is absent entirely.
        assert_eq!(search.groups.len(), 1);
        assert_eq!(search.groups[0].section.key, SectionKey::Jobs);
        assert_eq!(search.groups[0].matches.len(), 2);
        assert_eq!(search.total, 2);

        assert_eq!(set.keys().first(), Some(&SectionKey::Search));
    }

    #[test]
    fn active_section_falls_back_when_no_longer_rendered() {
        let snapshot = snapshot();

        let with_search = render_set(&snapshot, "google");
        assert_eq!(
            with_search.resolve_active(SectionKey::Search),
            SectionKey::Search
        );
        assert_eq!(
            with_search.resolve_active(SectionKey::Coding),
            SectionKey::Coding
        );

        // Clearing the query removes the search section; an active search
        // tab falls back to the first rendered section.
        let cleared = render_set(&snapshot, "");
        assert_eq!(cleared.resolve_active(SectionKey::Search), SectionKey::Jobs);
    }
}
