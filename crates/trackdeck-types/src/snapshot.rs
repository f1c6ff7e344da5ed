use crate::record::Record;
use crate::section::{GoalCadence, SectionKey};
use serde::{Deserialize, Serialize};

const EMPTY: &[Record] = &[];

/// The full aggregate of all record collections as of one successful fetch.
///
/// Replaced wholesale on every refresh; never mutated in place. A collection
/// missing from the wire payload deserializes as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub job_applications: Vec<Record>,
    #[serde(default)]
    pub coding_problems: Vec<Record>,
    #[serde(default)]
    pub projects: Vec<Record>,
    #[serde(default)]
    pub networking_contacts: Vec<Record>,
    #[serde(default)]
    pub daily_goals: Vec<Record>,
    #[serde(default)]
    pub weekly_goals: Vec<Record>,
    #[serde(default)]
    pub monthly_goals: Vec<Record>,
    #[serde(default)]
    pub meetings: Vec<Record>,
}

impl Snapshot {
    /// The collection backing a section. The synthetic `Search` section has
    /// no collection of its own.
    pub fn collection(&self, key: SectionKey) -> &[Record] {
        match key {
            SectionKey::Jobs => &self.job_applications,
            SectionKey::Coding => &self.coding_problems,
            SectionKey::Projects => &self.projects,
            SectionKey::Networking => &self.networking_contacts,
            SectionKey::DailyGoals => &self.daily_goals,
            SectionKey::WeeklyGoals => &self.weekly_goals,
            SectionKey::MonthlyGoals => &self.monthly_goals,
            SectionKey::Meetings => &self.meetings,
            SectionKey::Search => EMPTY,
        }
    }

    pub fn goals(&self, cadence: GoalCadence) -> &[Record] {
        self.collection(cadence.section_key())
    }
}
